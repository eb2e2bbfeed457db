pub mod classify;
pub mod edge;
pub mod graph;
pub mod metatype;
pub mod ports;
pub mod render;
pub mod snapshot;
