//! Application services layer.

pub mod directive;
pub mod error;
pub mod render;
