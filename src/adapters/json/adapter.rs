use crate::domain::ports::SnapshotSource;
use crate::domain::snapshot::TypeSnapshot;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialized `TypeSnapshot` adapter
pub struct JsonSnapshotSource {
    pub json_path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            json_path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load(&self) -> Result<TypeSnapshot> {
        let json_content = std::fs::read_to_string(&self.json_path).with_context(|| {
            format!("Failed to read snapshot file: {}", self.json_path.display())
        })?;
        let snapshot: TypeSnapshot =
            serde_json::from_str(&json_content).context("Failed to parse TypeSnapshot JSON")?;
        debug!(
            types = snapshot.all_types().len(),
            path = %self.json_path.display(),
            "Loaded JSON snapshot"
        );
        Ok(snapshot)
    }
}
