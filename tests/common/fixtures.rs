//! Test fixture generators for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

/// Relationship database contents: `(fullname, metatype)` rows and relation pairs by name.
#[derive(Default)]
pub struct DbFixture {
    pub types: Vec<(&'static str, &'static str)>,
    pub extends: Vec<(&'static str, &'static str)>,
    pub implements: Vec<(&'static str, &'static str)>,
    pub references: Vec<(&'static str, &'static str)>,
}

/// Write `fixture` into a fresh SQLite file under `dir`, using the same schema
/// the source extractor produces.
pub fn create_relationship_db(dir: &Path, fixture: &DbFixture) -> PathBuf {
    let path = dir.join("types.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE metatypes (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT);
         INSERT INTO metatypes(name) VALUES ('abstract_class');
         INSERT INTO metatypes(name) VALUES ('class');
         INSERT INTO metatypes(name) VALUES ('enum');
         INSERT INTO metatypes(name) VALUES ('interface');
         CREATE TABLE types (id INTEGER PRIMARY KEY AUTOINCREMENT, fullname TEXT, type INTEGER,
             FOREIGN KEY(type) REFERENCES metatypes(id));
         CREATE TABLE extends (id INTEGER PRIMARY KEY AUTOINCREMENT, source INTEGER, target INTEGER,
             FOREIGN KEY(source) REFERENCES types(id), FOREIGN KEY(target) REFERENCES types(id));
         CREATE TABLE implements (id INTEGER PRIMARY KEY AUTOINCREMENT, source INTEGER, target INTEGER,
             FOREIGN KEY(source) REFERENCES types(id), FOREIGN KEY(target) REFERENCES types(id));
         CREATE TABLE reference (id INTEGER PRIMARY KEY AUTOINCREMENT, source INTEGER, target INTEGER,
             FOREIGN KEY(source) REFERENCES types(id), FOREIGN KEY(target) REFERENCES types(id));",
    )
    .unwrap();

    for (name, metatype) in &fixture.types {
        conn.execute(
            "INSERT INTO types(fullname, type) SELECT ?1, id FROM metatypes WHERE name = ?2",
            params![name, metatype],
        )
        .unwrap();
    }

    for (table, pairs) in [
        ("extends", &fixture.extends),
        ("implements", &fixture.implements),
        ("reference", &fixture.references),
    ] {
        let sql = format!(
            "INSERT INTO {table}(source, target) \
             SELECT s.id, t.id FROM types AS s, types AS t WHERE s.fullname = ?1 AND t.fullname = ?2"
        );
        for (source, target) in pairs {
            conn.execute(&sql, params![source, target]).unwrap();
        }
    }

    path
}

/// Two classes in an `extends` relation and an interface only referenced.
pub fn create_fixture_simple() -> DbFixture {
    DbFixture {
        types: vec![("A", "class"), ("B", "class"), ("C", "interface")],
        extends: vec![("A", "B")],
        references: vec![("A", "C")],
        ..Default::default()
    }
}

/// A small hierarchy under the collapsed package root.
pub fn create_fixture_hierarchy() -> DbFixture {
    DbFixture {
        types: vec![
            ("org.bbaw.bts.core.Service", "interface"),
            ("org.bbaw.bts.core.NamedService", "interface"),
            ("org.bbaw.bts.core.BaseService", "abstract_class"),
            ("org.bbaw.bts.core.ServiceImpl", "class"),
            ("org.bbaw.bts.core.Status", "enum"),
            ("org.bbaw.bts.util.Strings", "class"),
        ],
        extends: vec![(
            "org.bbaw.bts.core.BaseService",
            "org.bbaw.bts.core.ServiceImpl",
        )],
        implements: vec![
            ("org.bbaw.bts.core.Service", "org.bbaw.bts.core.NamedService"),
            ("org.bbaw.bts.core.NamedService", "org.bbaw.bts.core.BaseService"),
        ],
        references: vec![
            ("org.bbaw.bts.core.ServiceImpl", "org.bbaw.bts.core.Status"),
            ("org.bbaw.bts.util.Strings", "org.bbaw.bts.core.Status"),
        ],
    }
}
