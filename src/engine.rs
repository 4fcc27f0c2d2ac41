//! Query engine: the fixed set of aggregation operations behind each
//! analytical intent. Every operation is a bounded scan over one of the two
//! in-memory frames; failures never leave this module, they become warning
//! text on the result.

use crate::assistant::{AnalysisResult, DataType};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::extract::{mentioned_names, rank_count};
use crate::format::{self, Attribution};
use crate::loader::Datasets;
use crate::schema::{numeric_column, text_column, STATE_AVERAGE};
use polars::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct QueryEngine<'a> {
    datasets: &'a Datasets,
    catalog: &'a Catalog,
}

impl<'a> QueryEngine<'a> {
    pub fn new(datasets: &'a Datasets, catalog: &'a Catalog) -> Self {
        Self { datasets, catalog }
    }

    /// District-superlative rainfall query. Any unexpected fault is caught
    /// and surfaced as an apologetic message rather than propagated.
    pub fn superlative_rainfall(&self) -> AnalysisResult {
        match self.superlative_rainfall_inner() {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "superlative rainfall query failed");
                AnalysisResult::message(format!(
                    "❌ An unexpected error occurred while analyzing rainfall data: {e}"
                ))
            }
        }
    }

    pub fn rainfall(&self, question: &str) -> AnalysisResult {
        self.rainfall_inner(question).unwrap_or_else(|e| {
            warn!(error = %e, "rainfall query failed");
            AnalysisResult::message(format!(
                "⚠️ Sorry, I couldn't analyze the rainfall data right now ({e})."
            ))
        })
    }

    pub fn crops(&self, question: &str) -> AnalysisResult {
        self.crops_inner(question).unwrap_or_else(|e| {
            warn!(error = %e, "crop query failed");
            AnalysisResult::message(format!(
                "⚠️ Sorry, I couldn't analyze the crop data right now ({e})."
            ))
        })
    }

    pub fn correlation(&self) -> AnalysisResult {
        self.correlation_inner().unwrap_or_else(|e| {
            warn!(error = %e, "correlation summary failed");
            AnalysisResult::message(format!(
                "⚠️ Sorry, I couldn't summarize the datasets right now ({e})."
            ))
        })
    }

    pub fn overview(&self) -> AnalysisResult {
        self.overview_inner().unwrap_or_else(|e| {
            warn!(error = %e, "overview summary failed");
            AnalysisResult::message(format!(
                "⚠️ Sorry, I couldn't summarize the datasets right now ({e})."
            ))
        })
    }

    fn superlative_rainfall_inner(&self) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let schema = &self.datasets.rainfall_schema;

        if df.height() == 0 {
            return Ok(AnalysisResult::message(
                "⚠️ Sorry, I couldn't find any rainfall data to analyze right now.",
            ));
        }

        let names = text_column(df, &schema.district)?;
        let totals = numeric_column(df, &schema.total)?;

        let mut kept_names: Vec<String> = Vec::new();
        let mut kept_totals: Vec<f64> = Vec::new();
        for (name, total) in names.iter().zip(totals.iter()) {
            if let Some(v) = total {
                kept_names.push(name.clone());
                kept_totals.push(*v);
            }
        }
        if kept_names.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ The rainfall data appears empty or invalid after cleaning.",
            ));
        }

        // Per-district means in first-occurrence order; duplicate rows for a
        // district fold into one mean.
        let mut order: Vec<&str> = Vec::new();
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for (name, value) in kept_names.iter().zip(kept_totals.iter()) {
            match sums.get_mut(name.as_str()) {
                Some((sum, count)) => {
                    *sum += value;
                    *count += 1;
                }
                None => {
                    sums.insert(name.as_str(), (*value, 1));
                    order.push(name.as_str());
                }
            }
        }

        // Stable argmax: strict greater-than, so the earliest district keeps
        // the title on a tie.
        let mut best: Option<(&str, f64)> = None;
        for &name in &order {
            let (sum, count) = sums[name];
            let mean = sum / count as f64;
            if best.map_or(true, |(_, b)| mean > b) {
                best = Some((name, mean));
            }
        }
        let Some((top_district, top_mean)) = best else {
            return Ok(AnalysisResult::message(
                "⚠️ Unable to compute rainfall statistics due to missing data.",
            ));
        };
        debug!(district = top_district, mean = top_mean, "superlative rainfall resolved");

        let cleaned = DataFrame::new(vec![
            Series::new(schema.district.as_str(), kept_names.clone()),
            Series::new(schema.total.as_str(), kept_totals.clone()),
        ])?;

        let text = format!(
            "🌧️ The district with the **highest average rainfall** is **{top_district}**, \
             with approximately **{top_mean:.2} mm** of rainfall."
        );
        Ok(AnalysisResult::with_table(text, cleaned, DataType::Rainfall))
    }

    fn rainfall_inner(&self, question: &str) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let schema = &self.datasets.rainfall_schema;
        let names = text_column(df, &schema.district)?;
        let totals = numeric_column(df, &schema.total)?;

        let mentioned = mentioned_names(&names, question);
        match mentioned.len() {
            0 => {}
            1 => return self.single_district(&mentioned[0], &names, &totals),
            2 => return self.compare_districts(&mentioned[0], &mentioned[1], &names, &totals),
            _ => {
                let data = filter_names(df, &names, &mentioned)?;
                let mut text = format::heading("🌧️ Rainfall Data for Multiple Districts");
                text.push_str(&format!(
                    "Showing rainfall data for {} districts.\n\n",
                    mentioned.len()
                ));
                text.push_str(format::attribution(Attribution::Imd));
                return Ok(AnalysisResult::with_table(text, data, DataType::Rainfall));
            }
        }

        if contains_any(question, &["highest", "maximum", "most", "top"]) {
            self.rainfall_top(question, &names, &totals)
        } else if contains_any(question, &["lowest", "minimum", "least"]) {
            self.rainfall_bottom(&names, &totals)
        } else if contains_any(question, &["average", "mean"]) {
            self.rainfall_average(&names, &totals)
        } else {
            let data = df.head(Some(15));
            let mut text = format::heading("🌧️ District Rainfall Data");
            text.push_str(&format!(
                "Showing rainfall data for {} districts including seasonal breakdowns.\n\n",
                df.height()
            ));
            text.push_str("**Available Data:**\n");
            text.push_str(&format::list_item("South West Monsoon (June-September)"));
            text.push_str(&format::list_item("North East Monsoon (October-December)"));
            text.push_str(&format::list_item("Winter Season (January-February)"));
            text.push_str(&format::list_item("Hot Weather Season (March-May)"));
            text.push('\n');
            text.push_str(format::attribution(Attribution::Imd));
            Ok(AnalysisResult::with_table(text, data, DataType::Rainfall))
        }
    }

    fn single_district(
        &self,
        district: &str,
        names: &[String],
        totals: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let schema = &self.datasets.rainfall_schema;
        let row = names.iter().position(|n| n == district).unwrap_or(0);

        let total = totals[row];
        let sw = match &schema.sw_monsoon {
            Some(col) => numeric_column(df, col)?[row],
            None => None,
        };
        let ne = match &schema.ne_monsoon {
            Some(col) => numeric_column(df, col)?[row],
            None => None,
        };

        let mut text = format::heading(&format!("🌧️ Rainfall Analysis for {district}"));
        text.push_str(&format::subheading("Annual Rainfall"));
        text.push_str(&format::bullet("Total Annual Rainfall", &format::mm(total)));
        text.push_str(&format::bullet(
            "South West Monsoon (June-Sept)",
            &format::mm(sw),
        ));
        text.push_str(&format::bullet(
            "North East Monsoon (Oct-Dec)",
            &format::mm(ne),
        ));
        text.push('\n');

        if let (Some(t), Some(state)) = (total, sentinel_total(names, totals)) {
            let diff = t - state;
            if diff > 0.0 {
                text.push_str(&format!(
                    "📊 This is **{diff:.1} mm above** the state average.\n\n"
                ));
            } else {
                text.push_str(&format!(
                    "📊 This is **{:.1} mm below** the state average.\n\n",
                    diff.abs()
                ));
            }
        }

        text.push_str(format::attribution(Attribution::Imd));
        let wanted = vec![district.to_string()];
        let data = filter_names(df, names, &wanted)?;
        Ok(AnalysisResult::with_table(text, data, DataType::Rainfall))
    }

    fn compare_districts(
        &self,
        first: &str,
        second: &str,
        names: &[String],
        totals: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let r1 = names.iter().position(|n| n == first).and_then(|i| totals[i]);
        let r2 = names.iter().position(|n| n == second).and_then(|i| totals[i]);

        let rows = vec![
            (format!("**{first}**"), format::mm(r1)),
            (format!("**{second}**"), format::mm(r2)),
        ];

        let mut text = format::heading("📊 Rainfall Comparison");
        text.push_str(&format::subheading(&format!("{first} vs {second}")));
        text.push('\n');
        text.push_str(&format::two_column_table("District", "Total Rainfall", &rows));
        text.push('\n');

        if let (Some(a), Some(b)) = (r1, r2) {
            // Strictly-greater wins; an exact tie labels the second-named
            // district as higher with a 0.0 difference.
            let higher = if a > b { first } else { second };
            let diff = (a - b).abs();
            text.push_str(&format!(
                "**Analysis**: {higher} received **{diff:.1} mm more** rainfall than the other district.\n\n"
            ));
        } else {
            text.push_str(
                "**Analysis**: one of the totals is not recorded, so the difference cannot be computed.\n\n",
            );
        }

        text.push_str(format::attribution(Attribution::Imd));
        let wanted = vec![first.to_string(), second.to_string()];
        let data = filter_names(df, names, &wanted)?;
        Ok(AnalysisResult::with_table(text, data, DataType::Rainfall))
    }

    fn rainfall_top(
        &self,
        question: &str,
        names: &[String],
        totals: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let n = rank_count(question);
        let ranked = ranked_desc(totals, |i| names[i] == STATE_AVERAGE);
        if ranked.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ No usable rainfall totals to rank.",
            ));
        }

        let top: Vec<u32> = ranked.into_iter().take(n).collect();
        let data = take_rows(df, &top)?;
        let items = rank_items(&top, names, totals, |v| format!("{v:.1} mm"));

        let mut text = format::heading(&format!("🏆 Top {n} Districts by Rainfall"));
        text.push_str(&format::subheading("Highest Rainfall:"));
        text.push_str(&format!("**{}** with **{}**\n\n", items[0].0, items[0].1));
        text.push_str(&format::subheading("Complete Ranking:"));
        text.push_str(&format::ranked_list(&items));
        text.push('\n');
        text.push_str(format::attribution(Attribution::Imd));
        Ok(AnalysisResult::with_table(text, data, DataType::Rainfall))
    }

    fn rainfall_bottom(
        &self,
        names: &[String],
        totals: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let ranked = ranked_asc(totals, |i| names[i] == STATE_AVERAGE);
        if ranked.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ No usable rainfall totals to rank.",
            ));
        }

        let bottom: Vec<u32> = ranked.into_iter().take(10).collect();
        let data = take_rows(df, &bottom)?;
        let items = rank_items(&bottom, names, totals, |v| format!("{v:.1} mm"));

        let mut text = format::heading("📉 Districts with Lowest Rainfall");
        text.push_str(&format::subheading("Lowest Rainfall:"));
        text.push_str(&format!("**{}** with **{}**\n\n", items[0].0, items[0].1));
        text.push_str(&format::subheading("Bottom 10 Districts:"));
        text.push_str(&format::ranked_list(&items));
        text.push('\n');
        text.push_str(format::attribution(Attribution::Imd));
        Ok(AnalysisResult::with_table(text, data, DataType::Rainfall))
    }

    fn rainfall_average(
        &self,
        names: &[String],
        totals: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.rainfall;
        let sentinel_row = names.iter().position(|n| n == STATE_AVERAGE);

        if let Some(row) = sentinel_row {
            if let Some(value) = totals[row] {
                let data = take_rows(df, &[row as u32])?;
                let mut text = format::heading("📊 State Average Rainfall");
                text.push_str(&format!("**Average Annual Rainfall**: {value:.1} mm\n\n"));
                text.push_str(format::attribution(Attribution::Imd));
                return Ok(AnalysisResult::with_table(text, data, DataType::Rainfall));
            }
        }

        let values: Vec<f64> = names
            .iter()
            .zip(totals.iter())
            .filter(|(n, _)| n.as_str() != STATE_AVERAGE)
            .filter_map(|(_, v)| *v)
            .collect();
        if values.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ Unable to compute rainfall statistics due to missing data.",
            ));
        }
        let average = values.iter().sum::<f64>() / values.len() as f64;

        let mut text = format::heading("📊 Average Rainfall");
        text.push_str(&format!(
            "**Calculated Average**: {average:.1} mm (across {} districts)\n\n",
            values.len()
        ));
        text.push_str(format::attribution(Attribution::Imd));
        Ok(AnalysisResult::with_table(text, df.head(Some(15)), DataType::Rainfall))
    }

    fn crops_inner(&self, question: &str) -> Result<AnalysisResult> {
        let df = &self.datasets.crops;
        let schema = &self.datasets.crop_schema;
        let names = text_column(df, &schema.name)?;
        let production = numeric_column(df, &schema.production)?;

        let mentioned = mentioned_names(&names, question);
        if !mentioned.is_empty() {
            return self.crop_details(&mentioned, &names, &production);
        }

        if contains_any(question, &["production", "produce", "top"]) {
            self.crop_production_ranking(question, &names, &production)
        } else if contains_any(question, &["productivity", "yield"]) {
            self.crop_productivity_ranking(&names)
        } else if question.contains("area") {
            self.crop_area_ranking(&names)
        } else {
            let data = df.head(Some(10));
            let mut text = format::heading("🌾 Crop Production Statistics");
            text.push_str("Showing production, area, and productivity data for major crops.\n\n");
            text.push_str(&format!("**Total Crops in Dataset**: {}\n\n", df.height()));
            text.push_str(format::attribution(Attribution::Agriculture));
            Ok(AnalysisResult::with_table(text, data, DataType::Crops))
        }
    }

    fn crop_details(
        &self,
        mentioned: &[String],
        names: &[String],
        production: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.crops;
        let schema = &self.datasets.crop_schema;
        let area = match &schema.area {
            Some(col) => numeric_column(df, col)?,
            None => vec![None; df.height()],
        };
        let productivity = match &schema.productivity {
            Some(col) => numeric_column(df, col)?,
            None => vec![None; df.height()],
        };

        let mut text = format::heading("🌾 Crop Production Analysis");
        for crop in mentioned.iter().take(5) {
            if let Some(row) = names.iter().position(|n| n == crop) {
                text.push_str(&format::subheading(crop));
                text.push_str(&format::bullet(
                    "Area Under Cultivation",
                    &format::quantity(area[row], 2, "thousand hectares"),
                ));
                text.push_str(&format::bullet(
                    "Total Production",
                    &format::quantity(production[row], 2, "thousand metric tonnes"),
                ));
                text.push_str(&format::bullet(
                    "Productivity",
                    &format::quantity(productivity[row], 0, "kg per hectare"),
                ));
                text.push('\n');
            }
        }
        text.push_str(format::attribution(Attribution::Agriculture));

        let data = filter_names(df, names, mentioned)?;
        Ok(AnalysisResult::with_table(text, data, DataType::Crops))
    }

    fn crop_production_ranking(
        &self,
        question: &str,
        names: &[String],
        production: &[Option<f64>],
    ) -> Result<AnalysisResult> {
        let df = &self.datasets.crops;
        let n = rank_count(question);
        let ranked = ranked_desc(production, |_| false);
        if ranked.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ No usable production figures to rank.",
            ));
        }

        let top: Vec<u32> = ranked.into_iter().take(n).collect();
        let data = take_rows(df, &top)?;
        let items = rank_items(&top, names, production, |v| {
            format!("{v:.2} thousand MT")
        });

        let mut text = format::heading(&format!("🏆 Top {n} Crops by Production"));
        text.push_str(&format::subheading("Highest Production:"));
        text.push_str(&format!(
            "**{}** with **{}**\n\n",
            items[0].0, items[0].1
        ));
        text.push_str(&format::subheading("Complete Ranking:"));
        text.push('\n');
        text.push_str(&format::ranked_list(&items));
        text.push('\n');
        text.push_str(format::attribution(Attribution::Agriculture));
        Ok(AnalysisResult::with_table(text, data, DataType::Crops))
    }

    fn crop_productivity_ranking(&self, names: &[String]) -> Result<AnalysisResult> {
        let df = &self.datasets.crops;
        let schema = &self.datasets.crop_schema;
        let Some(col) = &schema.productivity else {
            return Ok(AnalysisResult::message(
                "⚠️ The crop table has no productivity column.",
            ));
        };
        let productivity = numeric_column(df, col)?;

        // Zero or negative productivity rows are excluded before ranking.
        let ranked = ranked_desc(&productivity, |i| {
            matches!(productivity[i], Some(v) if v <= 0.0)
        });
        if ranked.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ No crops with positive productivity to rank.",
            ));
        }

        let top: Vec<u32> = ranked.into_iter().take(10).collect();
        let data = take_rows(df, &top)?;
        let items = rank_items(&top, names, &productivity, |v| format!("{v:.0} kg/ha"));

        let mut text = format::heading("📈 Top 10 Crops by Productivity");
        text.push_str(&format::subheading("Highest Yield:"));
        text.push_str(&format!(
            "**{}** with **{}**\n\n",
            items[0].0, items[0].1
        ));
        text.push_str(&format::subheading("Complete Ranking:"));
        text.push('\n');
        text.push_str(&format::ranked_list(&items));
        text.push('\n');
        text.push_str(format::attribution(Attribution::Agriculture));
        Ok(AnalysisResult::with_table(text, data, DataType::Crops))
    }

    fn crop_area_ranking(&self, names: &[String]) -> Result<AnalysisResult> {
        let df = &self.datasets.crops;
        let schema = &self.datasets.crop_schema;
        let Some(col) = &schema.area else {
            return Ok(AnalysisResult::message(
                "⚠️ The crop table has no area column.",
            ));
        };
        let area = numeric_column(df, col)?;

        let ranked = ranked_desc(&area, |_| false);
        if ranked.is_empty() {
            return Ok(AnalysisResult::message(
                "⚠️ No usable area figures to rank.",
            ));
        }

        let top: Vec<u32> = ranked.into_iter().take(10).collect();
        let data = take_rows(df, &top)?;
        let items = rank_items(&top, names, &area, |v| {
            format!("{v:.2} thousand hectares")
        });

        let mut text = format::heading("📏 Top 10 Crops by Cultivation Area");
        text.push_str(&format::ranked_list(&items));
        text.push('\n');
        text.push_str(format::attribution(Attribution::Agriculture));
        Ok(AnalysisResult::with_table(text, data, DataType::Crops))
    }

    fn correlation_inner(&self) -> Result<AnalysisResult> {
        let mut text = format::heading("🔗 Agriculture & Climate Data Analysis");
        text.push_str(&format::subheading("Available Datasets:"));
        text.push('\n');
        text.push_str(&self.dataset_summary()?);
        text.push_str(&format!(
            "**Note**: The datasets cover different periods ({} for crops, {} for rainfall); \
             no joint statistic is computed, but side-by-side inspection is possible.\n\n",
            self.catalog.crops.years_covered, self.catalog.rainfall.years_covered
        ));
        text.push_str(format::attribution(Attribution::Combined));
        Ok(AnalysisResult::with_both(
            text,
            self.datasets.rainfall.head(Some(10)),
            self.datasets.crops.head(Some(10)),
        ))
    }

    fn overview_inner(&self) -> Result<AnalysisResult> {
        let mut text = format::heading("🌾 AgriClimate Intelligence System");
        text.push_str("I have access to two datasets from **data.gov.in**:\n\n");
        text.push_str(&format::subheading("📊 Available Datasets:"));
        text.push('\n');
        text.push_str(&self.dataset_summary()?);
        text.push_str(&format::subheading("💡 You can ask me:"));
        text.push_str(&format::list_item("Which district has the highest rainfall?"));
        text.push_str(&format::list_item("Compare rainfall between two districts"));
        text.push_str(&format::list_item("Show top 5 crops by production"));
        text.push_str(&format::list_item("Which crops have the highest productivity?"));
        text.push('\n');
        text.push_str(format::attribution(Attribution::DataGov));
        Ok(AnalysisResult::with_both(
            text,
            self.datasets.rainfall.head(Some(10)),
            self.datasets.crops.head(Some(10)),
        ))
    }

    /// Shared dataset description blocks for the correlation and overview
    /// summaries.
    fn dataset_summary(&self) -> Result<String> {
        let names = text_column(&self.datasets.rainfall, &self.datasets.rainfall_schema.district)?;
        let district_count = names.iter().filter(|n| n.as_str() != STATE_AVERAGE).count();

        let mut out = String::new();
        out.push_str(&format!("**1. {}**\n", self.catalog.rainfall.title));
        out.push_str(&format::list_item(&format!(
            "{district_count} districts with seasonal and annual rainfall measurements"
        )));
        out.push_str(&format::list_item(&format!(
            "Source: {}",
            self.catalog.rainfall.source
        )));
        out.push('\n');
        out.push_str(&format!("**2. {}**\n", self.catalog.crops.title));
        out.push_str(&format::list_item(&format!(
            "{} major crops with area, production, and productivity metrics",
            self.datasets.crops.height()
        )));
        out.push_str(&format::list_item(&format!(
            "Source: {}",
            self.catalog.crops.source
        )));
        out.push('\n');
        Ok(out)
    }
}

fn contains_any(question: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| question.contains(t))
}

fn sentinel_total(names: &[String], totals: &[Option<f64>]) -> Option<f64> {
    names
        .iter()
        .position(|n| n == STATE_AVERAGE)
        .and_then(|i| totals[i])
}

/// Row indices with a usable value, sorted descending. The sort is stable,
/// so equal values keep table order and the earliest row wins a tie.
fn ranked_desc(values: &[Option<f64>], skip: impl Fn(usize) -> bool) -> Vec<u32> {
    let mut pairs: Vec<(u32, f64)> = values
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip(*i))
        .filter_map(|(i, v)| v.map(|v| (i as u32, v)))
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    pairs.into_iter().map(|(i, _)| i).collect()
}

fn ranked_asc(values: &[Option<f64>], skip: impl Fn(usize) -> bool) -> Vec<u32> {
    let mut pairs: Vec<(u32, f64)> = values
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip(*i))
        .filter_map(|(i, v)| v.map(|v| (i as u32, v)))
        .collect();
    pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    pairs.into_iter().map(|(i, _)| i).collect()
}

fn rank_items(
    indices: &[u32],
    names: &[String],
    values: &[Option<f64>],
    render: impl Fn(f64) -> String,
) -> Vec<(String, String)> {
    indices
        .iter()
        .filter_map(|&i| {
            let i = i as usize;
            values[i].map(|v| (names[i].clone(), render(v)))
        })
        .collect()
}

fn take_rows(df: &DataFrame, indices: &[u32]) -> Result<DataFrame> {
    let idx = IdxCa::from_vec("idx", indices.to_vec());
    Ok(df.take(&idx)?)
}

fn filter_names(df: &DataFrame, names: &[String], wanted: &[String]) -> Result<DataFrame> {
    let mask: Vec<bool> = names.iter().map(|n| wanted.contains(n)).collect();
    let mask = BooleanChunked::from_slice("mask", &mask);
    Ok(df.filter(&mask)?)
}
