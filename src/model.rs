// src/model.rs

use crate::domain::record::FeatureRecord;
use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Fixed location of the serialized model artifact, produced by the
/// offline training step.
pub const MODEL_PATH: &str = "models/rent_model.json";

/// The rent model trained offline and serialized as JSON: an intercept,
/// one coefficient per numeric/flag feature, and additive effects for the
/// two categorical features.
#[derive(Debug, Clone, Deserialize)]
pub struct RentModel {
    intercept: f64,
    coefficients: BTreeMap<String, f64>,
    borough_effects: BTreeMap<String, f64>,
    neighborhood_effects: BTreeMap<String, f64>,
}

impl RentModel {
    /// Loads the model artifact from `path`. A missing file is fatal for
    /// the caller; the error names the expected path.
    pub fn load(path: &str) -> Result<Self, ServerError> {
        if !Path::new(path).exists() {
            return Err(ServerError::MissingArtifact(path.to_string()));
        }

        let file = File::open(path)
            .map_err(|e| ServerError::ArtifactError(format!("Open model failed: {e}")))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ServerError> {
        serde_json::from_reader(reader)
            .map_err(|e| ServerError::ArtifactError(format!("Parse model failed: {e}")))
    }

    /// Predicted monthly rent in USD for one feature record.
    ///
    /// The record must structurally match the schema the model was trained
    /// on. A mismatch (wrong feature set, or a categorical level the model
    /// has never seen) is returned as `SchemaMismatch` and deliberately not
    /// handled here.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ServerError> {
        let features = record.numeric_features();
        if self.coefficients.len() != features.len() {
            return Err(ServerError::SchemaMismatch(format!(
                "model has {} coefficients but the record supplies {} features",
                self.coefficients.len(),
                features.len()
            )));
        }

        let mut rent = self.intercept;
        for (name, value) in features {
            let coef = self.coefficients.get(name).ok_or_else(|| {
                ServerError::SchemaMismatch(format!("model has no coefficient for `{name}`"))
            })?;
            rent += coef * value;
        }

        rent += categorical_effect(&self.borough_effects, "borough", &record.borough)?;
        rent += categorical_effect(
            &self.neighborhood_effects,
            "neighborhood",
            &record.neighborhood,
        )?;

        Ok(rent)
    }
}

fn categorical_effect(
    table: &BTreeMap<String, f64>,
    column: &str,
    level: &str,
) -> Result<f64, ServerError> {
    table.get(level).copied().ok_or_else(|| {
        ServerError::SchemaMismatch(format!("model was not trained on {column} `{level}`"))
    })
}
