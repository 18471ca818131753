//! Document nodes produced by directives and embedded into the host document.

use serde::{Deserialize, Serialize};

/// Class attached to every pagination container.
pub const PAGINATION_CLASS: &str = "m-article-pagination";

/// A single inline node inside a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Plain, non-clickable text.
    Text { content: String },
    /// Clickable reference to another document.
    Link { content: String, target_url: String },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn link(content: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self::Link {
            content: content.into(),
            target_url: target_url.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Node::Text { content } | Node::Link { content, .. } => content.as_str(),
        }
    }

    /// Returns the link target, or `None` for text nodes.
    pub fn target_url(&self) -> Option<&str> {
        match self {
            Node::Text { .. } => None,
            Node::Link { target_url, .. } => Some(target_url.as_str()),
        }
    }
}

/// Flat container of nodes tagged with a style class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationFragment {
    class: String,
    nodes: Vec<Node>,
}

impl PaginationFragment {
    pub(crate) fn new(nodes: Vec<Node>) -> Self {
        Self {
            class: PAGINATION_CLASS.to_string(),
            nodes,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Link { .. }))
    }

    /// Serialize the fragment into an HTML `<div>` holding one `<span>` or `<a>` per node.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"");
        html.push_str(&escape_attribute(&self.class));
        html.push_str("\">");
        for node in &self.nodes {
            match node {
                Node::Text { content } => {
                    html.push_str("<span>");
                    html.push_str(&escape_text(content));
                    html.push_str("</span>");
                }
                Node::Link {
                    content,
                    target_url,
                } => {
                    html.push_str("<a href=\"");
                    html.push_str(&escape_attribute(target_url));
                    html.push_str("\">");
                    html.push_str(&escape_text(content));
                    html.push_str("</a>");
                }
            }
        }
        html.push_str("</div>");
        html
    }
}

// Not `ammonia::clean_text`: that encodes spaces as `&#32;`, and separators
// such as ` | ` must keep literal spaces.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' | '\r' | '\t' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}
