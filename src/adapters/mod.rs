pub mod json;
pub mod sqlite;

use crate::adapters::json::adapter::JsonSnapshotSource;
use crate::adapters::sqlite::adapter::SqliteSnapshotSource;
use crate::domain::ports::SnapshotSource;
use std::path::Path;

/// Pick a snapshot source by file extension: `.json` snapshots, SQLite otherwise.
pub fn open_source(path: &Path) -> Box<dyn SnapshotSource> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonSnapshotSource::new(path))
    } else {
        Box::new(SqliteSnapshotSource::new(path))
    }
}
