use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::directive::DirectiveError;

/// Rendering request passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Human-readable document identifier used in diagnostics.
    pub document: String,
    /// Source markdown, possibly containing directive blocks.
    pub markdown: String,
}

impl RenderRequest {
    pub fn new(document: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            markdown: markdown.into(),
        }
    }
}

/// Deterministic rendering result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub html: String,
    /// Number of directive blocks executed.
    pub directives_run: u32,
    /// Number of fragments embedded into the document.
    pub fragments_rendered: u32,
}

/// Structured errors surfaced by the rendering pipeline. Any of them aborts the document build.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("markdown formatting failed: {message}")]
    Markdown { message: String },
    #[error("directive `{name}` at line {line} failed: {source}")]
    Directive {
        name: String,
        line: usize,
        #[source]
        source: DirectiveError,
    },
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// deterministic: given the same input, they return identical outputs or errors.
pub trait RenderService: Send + Sync {
    fn render(&self, request: &RenderRequest) -> Result<RenderOutput, RenderError>;
}
