//! Type snapshot - the in-memory form of the relational store
//!
//! A snapshot holds one name set per metatype and one pair set per stored
//! relation kind. It is produced by a [`SnapshotSource`](crate::domain::ports::SnapshotSource)
//! and consumed, unchanged, by the renderer.

use crate::domain::edge::{EdgeKind, Relation};
use crate::domain::metatype::Metatype;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSnapshot {
    #[serde(default)]
    pub interfaces: HashSet<String>,
    #[serde(default)]
    pub classes: HashSet<String>,
    #[serde(default)]
    pub abstract_classes: HashSet<String>,
    #[serde(default)]
    pub enums: HashSet<String>,

    #[serde(default)]
    pub extends: HashSet<Relation>,
    #[serde(default)]
    pub implements: HashSet<Relation>,
    #[serde(default)]
    pub references: HashSet<Relation>,
}

impl TypeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(&self, metatype: Metatype) -> &HashSet<String> {
        match metatype {
            Metatype::Interface => &self.interfaces,
            Metatype::Class => &self.classes,
            Metatype::AbstractClass => &self.abstract_classes,
            Metatype::Enum => &self.enums,
        }
    }

    pub fn types_mut(&mut self, metatype: Metatype) -> &mut HashSet<String> {
        match metatype {
            Metatype::Interface => &mut self.interfaces,
            Metatype::Class => &mut self.classes,
            Metatype::AbstractClass => &mut self.abstract_classes,
            Metatype::Enum => &mut self.enums,
        }
    }

    /// Relations loaded for a stored kind. `InterfaceExtends` is derived, so it has none.
    pub fn relations(&self, kind: EdgeKind) -> Option<&HashSet<Relation>> {
        match kind {
            EdgeKind::Extends => Some(&self.extends),
            EdgeKind::Implements => Some(&self.implements),
            EdgeKind::Reference => Some(&self.references),
            EdgeKind::InterfaceExtends => None,
        }
    }

    pub fn relations_mut(&mut self, kind: EdgeKind) -> Option<&mut HashSet<Relation>> {
        match kind {
            EdgeKind::Extends => Some(&mut self.extends),
            EdgeKind::Implements => Some(&mut self.implements),
            EdgeKind::Reference => Some(&mut self.references),
            EdgeKind::InterfaceExtends => None,
        }
    }

    /// Union of all four node sets.
    pub fn all_types(&self) -> HashSet<&str> {
        Metatype::ALL
            .iter()
            .flat_map(|m| self.types(*m))
            .map(String::as_str)
            .collect()
    }

    // Builder-style helpers, mostly for fixtures.

    pub fn with_type(mut self, name: &str, metatype: Metatype) -> Self {
        self.types_mut(metatype).insert(name.to_string());
        self
    }

    pub fn with_relation(mut self, kind: EdgeKind, source: &str, target: &str) -> Self {
        if let Some(set) = self.relations_mut(kind) {
            set.insert((source.to_string(), target.to_string()));
        }
        self
    }
}
