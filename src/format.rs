//! Response formatting primitives.
//!
//! Answers are assembled from these small pieces (heading, bullets, ranked
//! list, comparison table, attribution) so the text layout can be tested
//! without running a query, and queries never concatenate markdown by hand.

/// Dataset authority named in the attribution line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    Imd,
    Agriculture,
    Combined,
    DataGov,
}

pub fn heading(title: &str) -> String {
    format!("## {title}\n\n")
}

pub fn subheading(title: &str) -> String {
    format!("### {title}\n")
}

pub fn bullet(label: &str, value: &str) -> String {
    format!("- **{label}**: {value}\n")
}

pub fn list_item(text: &str) -> String {
    format!("- {text}\n")
}

/// 1-based rank-ordered list, one `N. **name**: value` line per entry.
pub fn ranked_list(items: &[(String, String)]) -> String {
    let mut out = String::new();
    for (idx, (name, value)) in items.iter().enumerate() {
        out.push_str(&format!("{}. **{}**: {}\n", idx + 1, name, value));
    }
    out
}

/// Two-column markdown table with a header row.
pub fn two_column_table(left: &str, right: &str, rows: &[(String, String)]) -> String {
    let mut out = format!("| {left} | {right} |\n|----------|----------------|\n");
    for (a, b) in rows {
        out.push_str(&format!("| {a} | {b} |\n"));
    }
    out
}

/// Fixed source-attribution line, always the final line of an answer.
pub fn attribution(source: Attribution) -> &'static str {
    match source {
        Attribution::Imd => "*[Source: India Meteorological Department via data.gov.in]*",
        Attribution::Agriculture => {
            "*[Source: Ministry of Agriculture & Farmers Welfare via data.gov.in]*"
        }
        Attribution::Combined => "*[Sources: IMD & Ministry of Agriculture via data.gov.in]*",
        Attribution::DataGov => "*[Data sourced from data.gov.in]*",
    }
}

/// Millimetre figure, or a placeholder when the cell was missing.
pub fn mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => "not recorded".to_string(),
    }
}

/// Generic quantity with a unit, same missing-cell placeholder as [`mm`].
pub fn quantity(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.decimals$} {unit}"),
        None => "not recorded".to_string(),
    }
}
