use crate::domain::edge::{EdgeKind, Relation};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Inheritance Graph - the `extends`/`implements` edges used for degree counting
///
/// Parallel edges are kept: a pair present in both `extends` and `implements`
/// counts twice toward each endpoint.
pub struct InheritanceGraph {
    /// The directed multigraph of type names and inheritance edges
    pub graph: DiGraph<String, EdgeKind>,

    /// Mapping from fully qualified name to node index
    pub name_to_node: HashMap<String, NodeIndex>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
        }
    }

    /// Build from relation sets; kinds that are not inheritance are skipped.
    pub fn from_relations<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = (EdgeKind, &'a HashSet<Relation>)>,
    {
        let mut graph = Self::new();
        for (kind, relations) in sets {
            if !kind.is_inheritance() {
                continue;
            }
            for (source, target) in relations {
                graph.add_edge(source, target, kind);
            }
        }
        graph
    }

    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_to_node.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_to_node.insert(name.to_string(), idx);
        idx
    }

    pub fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) {
        let s = self.add_node(source);
        let t = self.add_node(target);
        self.graph.add_edge(s, t, kind);
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    /// Occurrences of `name` as source or target over all edges. Unknown names have degree 0.
    pub fn degree(&self, name: &str) -> usize {
        self.get_node_by_name(name)
            .map(|idx| {
                self.graph.edges_directed(idx, Direction::Outgoing).count()
                    + self.graph.edges_directed(idx, Direction::Incoming).count()
            })
            .unwrap_or(0)
    }

    /// Subset of `names` with zero degree.
    pub fn isolated<'a, I>(&self, names: I) -> HashSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter(|name| self.degree(name) == 0)
            .collect()
    }
}

impl Default for InheritanceGraph {
    fn default() -> Self {
        Self::new()
    }
}
