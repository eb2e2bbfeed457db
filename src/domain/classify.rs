//! Edge classification and isolation filtering
//!
//! `implements` edges between two interfaces are split off into
//! `interface_extends`. Degree is then counted over `extends` and the remaining
//! `implements` only; `interface_extends` and `reference` edges never make a
//! type non-isolated. An interface whose only hierarchy edges are
//! `interface_extends` is therefore excluded from node declarations even though
//! its edges may still be drawn.

use crate::domain::edge::{EdgeKind, Relation};
use crate::domain::graph::InheritanceGraph;
use crate::domain::snapshot::TypeSnapshot;
use std::collections::HashSet;
use tracing::debug;

/// Edge sets after reclassification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedEdges {
    pub extends: HashSet<Relation>,
    pub interface_extends: HashSet<Relation>,
    pub implements: HashSet<Relation>,
    pub references: HashSet<Relation>,
}

impl ClassifiedEdges {
    pub fn classify(snapshot: &TypeSnapshot) -> Self {
        let (interface_extends, implements): (HashSet<Relation>, HashSet<Relation>) = snapshot
            .implements
            .iter()
            .cloned()
            .partition(|(a, b)| {
                snapshot.interfaces.contains(a) && snapshot.interfaces.contains(b)
            });

        debug!(
            interface_extends = interface_extends.len(),
            implements = implements.len(),
            "Split implements edges"
        );

        Self {
            extends: snapshot.extends.clone(),
            interface_extends,
            implements,
            references: snapshot.references.clone(),
        }
    }

    pub fn get(&self, kind: EdgeKind) -> &HashSet<Relation> {
        match kind {
            EdgeKind::Extends => &self.extends,
            EdgeKind::InterfaceExtends => &self.interface_extends,
            EdgeKind::Implements => &self.implements,
            EdgeKind::Reference => &self.references,
        }
    }

    /// Graph over `extends` ∪ `implements` (post-split).
    pub fn inheritance_graph(&self) -> InheritanceGraph {
        InheritanceGraph::from_relations([
            (EdgeKind::Extends, &self.extends),
            (EdgeKind::Implements, &self.implements),
        ])
    }
}

/// Types with zero inheritance degree. These get no node declaration, and an
/// edge is dropped only when both of its endpoints are in this set.
pub fn exclude_types<'a>(snapshot: &'a TypeSnapshot, edges: &ClassifiedEdges) -> HashSet<&'a str> {
    let graph = edges.inheritance_graph();
    let excluded = graph.isolated(snapshot.all_types());
    debug!(excluded = excluded.len(), "Computed isolated types");
    excluded
}

/// Whether an edge survives the isolation filter.
pub fn keep_edge(excluded: &HashSet<&str>, (source, target): &Relation) -> bool {
    !(excluded.contains(source.as_str()) && excluded.contains(target.as_str()))
}
