//! Read-only queries against the relationship database.
//!
//! Schema: `metatypes(id, name)`, `types(id, fullname, type)` and the relation
//! tables `extends`, `implements`, `reference`, each with `source`/`target`
//! columns referencing `types.id`.

use crate::domain::edge::Relation;
use crate::domain::metatype::Metatype;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::collections::HashSet;

const TYPES_BY_METATYPE_SQL: &str = "SELECT types.fullname FROM types \
     INNER JOIN metatypes ON types.type = metatypes.id \
     WHERE metatypes.name = ?1";

fn relation_sql(table: &str) -> String {
    format!(
        "SELECT srctype.fullname, tgttype.fullname FROM \"{0}\" \
         INNER JOIN types AS srctype ON \"{0}\".source = srctype.id \
         INNER JOIN types AS tgttype ON \"{0}\".target = tgttype.id",
        table
    )
}

/// Fully qualified names of all types with the given metatype.
pub fn fetch_types(conn: &Connection, metatype: Metatype) -> Result<HashSet<String>> {
    let mut stmt = conn
        .prepare(TYPES_BY_METATYPE_SQL)
        .context("Failed to prepare type query")?;
    let names = stmt
        .query_map([metatype.as_str()], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<HashSet<_>>>()
        .with_context(|| format!("Failed to read types of metatype {}", metatype))?;
    Ok(names)
}

/// `(source_fullname, target_fullname)` pairs of a relation table.
pub fn fetch_relation(conn: &Connection, table: &str) -> Result<HashSet<Relation>> {
    let sql = relation_sql(table);
    let mut stmt = conn
        .prepare(&sql)
        .with_context(|| format!("Failed to prepare query on relation table {}", table))?;
    let pairs = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<rusqlite::Result<HashSet<_>>>()
        .with_context(|| format!("Failed to read relation table {}", table))?;
    Ok(pairs)
}
