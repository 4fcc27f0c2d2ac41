//! Schema contract for the two source tables.
//!
//! Column roles are resolved once, right after load, by matching headers
//! against role patterns. Queries only ever see validated role names, so a
//! missing required column surfaces at startup instead of mid-conversation.

use crate::error::{AssistantError, Result};
use lazy_static::lazy_static;
use polars::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// Synthetic row holding the statewide aggregate. Excluded from rankings,
/// used as the comparison baseline.
pub const STATE_AVERAGE: &str = "State Average";

lazy_static! {
    static ref DISTRICT_RE: Regex = Regex::new(r"(?i)district|region|zone|place").unwrap();
    static ref TOTAL_RAIN_RE: Regex = Regex::new(r"(?i)total.*rain|rain.*total").unwrap();
    static ref SW_MONSOON_RE: Regex = Regex::new(r"(?i)south\s*west.*monsoon").unwrap();
    static ref NE_MONSOON_RE: Regex = Regex::new(r"(?i)north\s*east.*monsoon").unwrap();
    static ref CROP_NAME_RE: Regex = Regex::new(r"(?i)crop|district|name").unwrap();
    static ref AREA_RE: Regex = Regex::new(r"(?i)area").unwrap();
    static ref PRODUCTION_RE: Regex = Regex::new(r"(?i)production").unwrap();
    static ref PRODUCTIVITY_RE: Regex = Regex::new(r"(?i)productivity|yield").unwrap();
}

/// Validated column roles of the district rainfall table.
#[derive(Debug, Clone)]
pub struct RainfallSchema {
    pub district: String,
    pub total: String,
    pub sw_monsoon: Option<String>,
    pub ne_monsoon: Option<String>,
}

impl RainfallSchema {
    /// Resolve roles from the frame's headers. District and total rainfall
    /// are required; the seasonal columns degrade to "not recorded" output.
    pub fn detect(df: &DataFrame) -> Result<Self> {
        let headers: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let district = first_match(&headers, &DISTRICT_RE).ok_or_else(|| {
            AssistantError::Schema("no district column in the rainfall table".to_string())
        })?;
        let total = first_match(&headers, &TOTAL_RAIN_RE).ok_or_else(|| {
            AssistantError::Schema("no total rainfall column in the rainfall table".to_string())
        })?;

        let sw_monsoon = first_match(&headers, &SW_MONSOON_RE);
        let ne_monsoon = first_match(&headers, &NE_MONSOON_RE);
        if sw_monsoon.is_none() {
            warn!("rainfall table has no south-west monsoon column, seasonal figures degrade");
        }
        if ne_monsoon.is_none() {
            warn!("rainfall table has no north-east monsoon column, seasonal figures degrade");
        }

        Ok(Self {
            district,
            total,
            sw_monsoon,
            ne_monsoon,
        })
    }
}

/// Validated column roles of the crop production table. The source file
/// reuses a generic district-style header for the crop name, so the name
/// role accepts either spelling.
#[derive(Debug, Clone)]
pub struct CropSchema {
    pub name: String,
    pub area: Option<String>,
    pub production: String,
    pub productivity: Option<String>,
}

impl CropSchema {
    pub fn detect(df: &DataFrame) -> Result<Self> {
        let headers: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let name = first_match(&headers, &CROP_NAME_RE).ok_or_else(|| {
            AssistantError::Schema("no crop name column in the crop table".to_string())
        })?;
        let production = first_match(&headers, &PRODUCTION_RE).ok_or_else(|| {
            AssistantError::Schema("no production column in the crop table".to_string())
        })?;

        let area = first_match(&headers, &AREA_RE);
        let productivity = first_match(&headers, &PRODUCTIVITY_RE);
        if area.is_none() {
            warn!("crop table has no area column, area rankings degrade");
        }
        if productivity.is_none() {
            warn!("crop table has no productivity column, yield rankings degrade");
        }

        Ok(Self {
            name,
            area,
            production,
            productivity,
        })
    }
}

fn first_match(headers: &[String], pattern: &Regex) -> Option<String> {
    headers.iter().find(|h| pattern.is_match(h)).cloned()
}

/// Load-time audit of the rainfall table: exactly one sentinel row, unique
/// district names otherwise. Violations are logged, not fatal, because the
/// aggregation paths all have a fallback when the sentinel is absent.
pub fn audit_rainfall(df: &DataFrame, schema: &RainfallSchema) {
    let names = match text_column(df, &schema.district) {
        Ok(names) => names,
        Err(_) => return,
    };

    let sentinel_count = names.iter().filter(|n| n.as_str() == STATE_AVERAGE).count();
    if sentinel_count != 1 {
        warn!(
            sentinel_count,
            "rainfall table should carry exactly one '{}' row", STATE_AVERAGE
        );
    }

    let mut seen = HashSet::new();
    for name in names.iter().filter(|n| n.as_str() != STATE_AVERAGE) {
        if !seen.insert(name.clone()) {
            warn!(district = %name, "duplicate district row in the rainfall table");
        }
    }
}

/// Read a column as text, one entry per row. Null cells become empty strings
/// so row indices stay aligned with the frame.
pub fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df.column(name)?;
    let values = match series.dtype() {
        DataType::String => series
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or("").to_string())
            .collect(),
        _ => (0..df.height())
            .map(|i| {
                series
                    .get(i)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect(),
    };
    Ok(values)
}

/// Read a column as numbers, one entry per row. Cells that fail coercion
/// (text noise, nulls, NaN) come back as `None` and are skipped by every
/// aggregation, never treated as zero.
pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let values = match series.dtype() {
        DataType::Float64 => series
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect(),
        DataType::Float32 => series
            .f32()?
            .into_iter()
            .map(|v| v.map(f64::from).filter(|x| x.is_finite()))
            .collect(),
        DataType::Int64 => series
            .i64()?
            .into_iter()
            .map(|v| v.map(|x| x as f64))
            .collect(),
        DataType::Int32 => series
            .i32()?
            .into_iter()
            .map(|v| v.map(f64::from))
            .collect(),
        DataType::String => series
            .str()?
            .into_iter()
            .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
            .collect(),
        other => {
            warn!(column = name, dtype = ?other, "column is not numeric, values skipped");
            vec![None; df.height()]
        }
    };
    Ok(values)
}
