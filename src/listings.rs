// src/listings.rs

use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

/// Fixed location of the cleaned listings table, produced by the offline
/// cleaning step.
pub const CLEAN_DATA_PATH: &str = "data/processed/clean_listings.csv";

/// One row of the cleaned listings table. Only the two categorical columns
/// are consumed here; any other column in the CSV is ignored.
#[derive(Debug, Clone, Deserialize)]
struct ListingRow {
    borough: Option<String>,
    neighborhood: Option<String>,
}

/// The immutable historical-listings table. It exists solely to enumerate
/// valid categorical choices for the form; no row is consumed beyond that.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Vec<ListingRow>,
}

impl ReferenceDataset {
    /// Loads the listings CSV from `path`. Same missing-file semantics as
    /// the model artifact: fatal for the caller, error names the path.
    pub fn load(path: &str) -> Result<Self, ServerError> {
        if !Path::new(path).exists() {
            return Err(ServerError::MissingArtifact(path.to_string()));
        }

        let file = File::open(path)
            .map_err(|e| ServerError::ArtifactError(format!("Open listings failed: {e}")))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ServerError> {
        let mut rows = Vec::new();
        for row in csv::Reader::from_reader(reader).deserialize() {
            let row: ListingRow =
                row.map_err(|e| ServerError::ArtifactError(format!("Bad listings row: {e}")))?;
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Distinct boroughs, ascending, with null/empty cells excluded.
    /// Ascending order keeps the form's select options stable.
    pub fn distinct_boroughs(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.borough.as_deref())
            .filter(|b| !b.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct neighborhoods of one borough, ascending, with null/empty
    /// cells excluded.
    pub fn distinct_neighborhoods(&self, borough: &str) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .filter(|row| row.borough.as_deref() == Some(borough))
            .filter_map(|row| row.neighborhood.as_deref())
            .filter(|n| !n.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }
}
