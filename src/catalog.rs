//! Dataset descriptor catalog. Display-only metadata about the two source
//! datasets, loaded from JSON with a built-in fallback so a missing or
//! malformed descriptor never blocks startup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub title: String,
    pub source: String,
    pub years_covered: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "rainfall_data")]
    pub rainfall: DatasetInfo,
    #[serde(rename = "crop_production")]
    pub crops: DatasetInfo,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            rainfall: DatasetInfo {
                title: "District-wise Rainfall Data - Tamil Nadu (2017-18)".to_string(),
                source: "India Meteorological Department".to_string(),
                years_covered: "2017-2018".to_string(),
                description: "Seasonal and annual rainfall for 32 Tamil Nadu districts"
                    .to_string(),
            },
            crops: DatasetInfo {
                title: "Crop Production Statistics - Tamil Nadu (2012-13)".to_string(),
                source: "Ministry of Agriculture & Farmers Welfare".to_string(),
                years_covered: "2012-2013".to_string(),
                description: "Area, production, and productivity for major crops".to_string(),
            },
        }
    }
}

impl Catalog {
    /// Load the descriptor file, falling back to the built-in catalog on any
    /// read or parse failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "bad dataset descriptor, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "no dataset descriptor, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let catalog = Catalog::load(Path::new("/nonexistent/dataset.json"));
        assert_eq!(catalog.rainfall.source, "India Meteorological Department");
        assert_eq!(catalog.crops.years_covered, "2012-2013");
    }

    #[test]
    fn parses_descriptor_json() {
        let raw = r#"{
            "rainfall_data": {
                "title": "Rainfall",
                "source": "IMD",
                "years_covered": "2017-2018"
            },
            "crop_production": {
                "title": "Crops",
                "source": "MoA",
                "years_covered": "2012-2013",
                "description": "Major crops"
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.rainfall.title, "Rainfall");
        assert_eq!(catalog.rainfall.description, "");
        assert_eq!(catalog.crops.description, "Major crops");
    }
}
