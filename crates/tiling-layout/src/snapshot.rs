// Versioned JSON form of a layout, for hosts that persist it.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::TilesPanel;
use crate::tree::{validate, TreeError};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed layout snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported layout snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("layout snapshot violates tree invariants: {0}")]
    Invalid(#[from] TreeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot<T = ()> {
    pub version: u32,
    pub root: Arc<TilesPanel<T>>,
}

impl<T> LayoutSnapshot<T> {
    pub fn new(root: Arc<TilesPanel<T>>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            root,
        }
    }
}

impl<T: Serialize> LayoutSnapshot<T> {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: DeserializeOwned> LayoutSnapshot<T> {
    /// Parse and validate. Trees that break the layout invariants are
    /// rejected rather than repaired.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        if let Err(err) = validate(&snapshot.root) {
            log::warn!("rejecting layout snapshot: {err}");
            return Err(err.into());
        }
        Ok(snapshot)
    }
}
