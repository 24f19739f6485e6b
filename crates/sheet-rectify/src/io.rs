//! JSON configuration and batch reports.
//!
//! The library never scans directories or decodes images; a caller runs
//! [`Rectifier`] per item and feeds each outcome into a [`BatchReport`].

use crate::{
    Quadrilateral, RectifyError, RectifyErrorKind, RectifyParams, RectifyResult, Rectifier,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum RectifyIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// On-disk configuration; every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RectifyConfig {
    #[serde(default)]
    pub rectify: RectifyParams,
    #[serde(default)]
    pub report_path: Option<String>,
}

impl RectifyConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, RectifyIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), RectifyIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the batch report path.
    pub fn report_path(&self) -> PathBuf {
        self.report_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("rectify_report.json"))
    }

    pub fn build_rectifier(&self) -> Rectifier {
        Rectifier::new(self.rectify.clone())
    }
}

/// What happened to one item of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Rectified {
        quad: Quadrilateral,
        cluster_size: usize,
        hull_vertices: usize,
        output_size: usize,
    },
    Failed {
        kind: RectifyErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

/// Per-item outcomes of a batch run, with totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `name`.
    pub fn push(&mut self, name: impl Into<String>, result: &Result<RectifyResult, RectifyError>) {
        let outcome = match result {
            Ok(res) => {
                self.succeeded += 1;
                ItemOutcome::Rectified {
                    quad: res.geometry.quad,
                    cluster_size: res.geometry.cluster.len(),
                    hull_vertices: res.geometry.hull.len(),
                    output_size: res.transform.size,
                }
            }
            Err(err) => {
                self.failed += 1;
                ItemOutcome::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                }
            }
        };
        self.items.push(ItemReport {
            name: name.into(),
            outcome,
        });
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemReport> {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Failed { .. }))
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), RectifyIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, RectifyIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
