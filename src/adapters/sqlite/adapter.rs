use crate::adapters::sqlite::query::{fetch_relation, fetch_types};
use crate::domain::edge::EdgeKind;
use crate::domain::metatype::Metatype;
use crate::domain::ports::SnapshotSource;
use crate::domain::snapshot::TypeSnapshot;
use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// SQLite relationship database adapter
pub struct SqliteSnapshotSource {
    pub db_path: PathBuf,
}

impl SqliteSnapshotSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            db_path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the database read-only. A missing file is an error, never created.
    fn open(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| {
            format!(
                "Failed to open relationship database: {}",
                self.db_path.display()
            )
        })
    }
}

impl SnapshotSource for SqliteSnapshotSource {
    #[instrument(skip_all, fields(path = %self.db_path.display()))]
    fn load(&self) -> Result<TypeSnapshot> {
        // Connection is dropped (and closed) at the end of this scope.
        let conn = self.open()?;
        debug!("Opened relationship database");
        load_from_connection(&conn)
    }
}

/// Read all node and relation sets from an open connection.
pub fn load_from_connection(conn: &Connection) -> Result<TypeSnapshot> {
    let mut snapshot = TypeSnapshot::new();

    for metatype in Metatype::ALL {
        let names = fetch_types(conn, metatype)?;
        debug!(metatype = %metatype, count = names.len(), "Loaded types");
        *snapshot.types_mut(metatype) = names;
    }

    for kind in EdgeKind::STORED {
        let (Some(table), Some(set)) = (kind.table(), snapshot.relations_mut(kind)) else {
            continue;
        };
        *set = fetch_relation(conn, table)?;
        debug!(table, count = set.len(), "Loaded relations");
    }

    Ok(snapshot)
}
