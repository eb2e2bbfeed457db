use crate::domain::snapshot::TypeSnapshot;
use anyhow::Result;

/// Type snapshot source port (implemented by Infrastructure)
pub trait SnapshotSource {
    fn load(&self) -> Result<TypeSnapshot>;
}
