//! CSV ingestion for the two source tables. Both frames are read once at
//! startup, schema-validated, and treated as read-only afterwards; a load
//! failure here halts the process before any question is handled.

use crate::error::{AssistantError, Result};
use crate::schema::{self, CropSchema, RainfallSchema};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// The two immutable tables plus their validated column roles.
#[derive(Debug)]
pub struct Datasets {
    pub rainfall: DataFrame,
    pub crops: DataFrame,
    pub rainfall_schema: RainfallSchema,
    pub crop_schema: CropSchema,
}

impl Datasets {
    /// Validate schemas over already-built frames. Used by the CSV path and
    /// by tests that assemble frames in memory.
    pub fn from_frames(rainfall: DataFrame, crops: DataFrame) -> Result<Self> {
        let rainfall_schema = RainfallSchema::detect(&rainfall)?;
        let crop_schema = CropSchema::detect(&crops)?;
        schema::audit_rainfall(&rainfall, &rainfall_schema);
        Ok(Self {
            rainfall,
            crops,
            rainfall_schema,
            crop_schema,
        })
    }
}

/// Load and validate both tables.
pub fn load_datasets(rainfall_path: &Path, crop_path: &Path) -> Result<Datasets> {
    let rainfall = read_csv(rainfall_path)?;
    let crops = read_csv(crop_path)?;
    info!(
        districts = rainfall.height(),
        crops = crops.height(),
        "datasets loaded"
    );
    Datasets::from_frames(rainfall, crops)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(1000))
        .finish()
        .map_err(|e| AssistantError::Load(format!("failed to read {}: {}", path.display(), e)))?
        .collect()
        .map_err(|e| AssistantError::Load(format!("failed to collect {}: {}", path.display(), e)))
}
