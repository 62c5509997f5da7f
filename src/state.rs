// src/state.rs

use crate::errors::ServerError;
use crate::listings::{ReferenceDataset, CLEAN_DATA_PATH};
use crate::model::{RentModel, MODEL_PATH};

/// Process-wide immutable state: both artifacts are loaded exactly once at
/// startup and shared read-only across every request for the life of the
/// process. No teardown needed.
pub struct AppState {
    pub model: RentModel,
    pub listings: ReferenceDataset,
}

impl AppState {
    /// Loads both artifacts from their fixed paths. Either one missing
    /// aborts startup; the error names the path that should exist.
    pub fn load() -> Result<Self, ServerError> {
        Ok(Self {
            model: RentModel::load(MODEL_PATH)?,
            listings: ReferenceDataset::load(CLEAN_DATA_PATH)?,
        })
    }
}
