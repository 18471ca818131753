mod config;
mod rewrite;

use std::sync::Arc;

use comrak::{Arena, format_html, nodes::AstNode, parse_document};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::application::directive::DirectiveRegistry;
use crate::application::render::types::{
    RenderError, RenderOutput, RenderRequest, RenderService,
};

use config::{build_sanitizer, default_options};
use rewrite::{RewriteOutcome, rewrite_ast};

/// Comrak-based rendering pipeline that expands directives and sanitises with Ammonia.
pub struct ComrakRenderService {
    options: comrak::Options<'static>,
    sanitizer: ammonia::Builder<'static>,
    directives: DirectiveRegistry,
}

impl ComrakRenderService {
    /// Construct a renderer with the built-in directives registered.
    pub fn new() -> Self {
        Self::with_directives(DirectiveRegistry::with_builtin())
    }

    /// Construct a renderer that only expands the directives in `directives`.
    pub fn with_directives(directives: DirectiveRegistry) -> Self {
        Self {
            options: default_options(),
            sanitizer: build_sanitizer(),
            directives,
        }
    }

    /// Render markdown into HTML while skipping the sanitisation stage. This is
    /// intended for diagnostics when refining sanitizer rules.
    pub fn render_unsanitized(&self, request: &RenderRequest) -> Result<RenderOutput, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, &request.markdown, &self.options);

        let outcome = rewrite_stage(root, &self.directives, &request.document)?;
        let html = render_html_stage(root, &self.options)?;

        Ok(into_output(html, &outcome))
    }
}

static RENDER_SERVICE: Lazy<Arc<ComrakRenderService>> =
    Lazy::new(|| Arc::new(ComrakRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<ComrakRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl Default for ComrakRenderService {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderService for ComrakRenderService {
    fn render(&self, request: &RenderRequest) -> Result<RenderOutput, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, &request.markdown, &self.options);

        let outcome = rewrite_stage(root, &self.directives, &request.document)?;
        let rendered_html = render_html_stage(root, &self.options)?;
        let sanitized_html = sanitize_stage(&rendered_html, &self.sanitizer);

        Ok(into_output(sanitized_html, &outcome))
    }
}

fn rewrite_stage<'a>(
    root: &'a AstNode<'a>,
    directives: &DirectiveRegistry,
    document: &str,
) -> Result<RewriteOutcome, RenderError> {
    let outcome = rewrite_ast(root, directives, document)?;
    debug!(
        target = "application::render",
        document,
        directives_run = outcome.directives_run,
        fragments_rendered = outcome.fragments_rendered,
        "Directive rewrite finished"
    );
    Ok(outcome)
}

fn render_html_stage<'a>(
    root: &'a AstNode<'a>,
    options: &comrak::Options<'static>,
) -> Result<String, RenderError> {
    let mut html = String::new();
    format_html(root, options, &mut html).map_err(|err| RenderError::Markdown {
        message: err.to_string(),
    })?;
    Ok(html)
}

fn sanitize_stage(html: &str, sanitizer: &ammonia::Builder<'static>) -> String {
    sanitizer.clean(html).to_string()
}

fn into_output(html: String, outcome: &RewriteOutcome) -> RenderOutput {
    RenderOutput {
        html,
        directives_run: outcome.directives_run,
        fragments_rendered: outcome.fragments_rendered,
    }
}
