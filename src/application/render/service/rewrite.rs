use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use tracing::debug;

use crate::application::{
    directive::{DirectiveInvocation, DirectiveRegistry},
    render::types::RenderError,
};

#[derive(Debug, Default)]
pub(crate) struct RewriteOutcome {
    pub(crate) directives_run: u32,
    pub(crate) fragments_rendered: u32,
}

/// Replace every fenced block naming a registered directive with the HTML it renders.
pub(crate) fn rewrite_ast<'a>(
    root: &'a AstNode<'a>,
    directives: &DirectiveRegistry,
    document: &str,
) -> Result<RewriteOutcome, RenderError> {
    let mut walker = RewriteWalker::new(directives, document);
    walker.visit_nodes(root)?;
    Ok(walker.outcome)
}

struct RewriteWalker<'a> {
    directives: &'a DirectiveRegistry,
    document: &'a str,
    outcome: RewriteOutcome,
}

struct DirectiveBlock {
    name: String,
    arguments: String,
    body: String,
    line: usize,
}

impl<'a> RewriteWalker<'a> {
    fn new(directives: &'a DirectiveRegistry, document: &'a str) -> Self {
        Self {
            directives,
            document,
            outcome: RewriteOutcome::default(),
        }
    }

    fn visit_nodes(&mut self, node: &AstNode<'_>) -> Result<(), RenderError> {
        if let Some(block) = extract_directive_block(node) {
            if self.directives.contains(&block.name) {
                let html = self.expand(&block)?;
                let mut data = node.data.borrow_mut();
                data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal: html,
                });
            }
        }

        let mut child = node.first_child();
        while let Some(next) = child {
            self.visit_nodes(next)?;
            child = next.next_sibling();
        }

        Ok(())
    }

    fn expand(&mut self, block: &DirectiveBlock) -> Result<String, RenderError> {
        let directive_error = |source| RenderError::Directive {
            name: block.name.clone(),
            line: block.line,
            source,
        };

        let invocation =
            DirectiveInvocation::parse(&block.arguments, &block.body).map_err(directive_error)?;
        let fragments = self
            .directives
            .run(&block.name, &invocation)
            .map_err(directive_error)?
            .unwrap_or_default();

        self.outcome.directives_run = self.outcome.directives_run.saturating_add(1);
        let count = u32::try_from(fragments.len()).unwrap_or(u32::MAX);
        self.outcome.fragments_rendered = self.outcome.fragments_rendered.saturating_add(count);

        if fragments.is_empty() {
            debug!(
                target = "application::render::directive",
                document = self.document,
                directive = block.name.as_str(),
                line = block.line,
                "Directive produced no output"
            );
        }

        let mut html = String::new();
        for fragment in &fragments {
            html.push_str(&fragment.to_html());
            html.push('\n');
        }
        Ok(html)
    }
}

fn extract_directive_block(node: &AstNode<'_>) -> Option<DirectiveBlock> {
    let data = node.data.borrow();
    let NodeValue::CodeBlock(block) = &data.value else {
        return None;
    };
    if !block.fenced {
        return None;
    }

    let info = block.info.trim();
    let (name, arguments) = match info.split_once(char::is_whitespace) {
        Some((name, arguments)) => (name, arguments),
        None => (info, ""),
    };
    if name.is_empty() {
        return None;
    }

    Some(DirectiveBlock {
        name: name.to_string(),
        arguments: arguments.to_string(),
        body: block.literal.clone(),
        line: data.sourcepos.start.line,
    })
}
