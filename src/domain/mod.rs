//! Domain layer: document nodes and the pure pagination renderer.

pub mod nodes;
pub mod pagination;
