//! depgraph library — Java type relationship store to Graphviz DOT.

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod dot;
