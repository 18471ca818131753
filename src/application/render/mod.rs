//! Markdown rendering pipeline hosting document directives.
//!
//! The pipeline is pure: it accepts markdown input, expands directive blocks
//! into HTML fragments, and produces deterministic, sanitised HTML output.

mod service;
mod types;

pub use service::{ComrakRenderService, render_service};
pub use types::{RenderError, RenderOutput, RenderRequest, RenderService};
