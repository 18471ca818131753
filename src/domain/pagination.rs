//! Pagination bar rendering.
//!
//! Rendering is pure: a [`PaginationRequest`] is turned into a flat
//! [`PaginationFragment`] of text and link nodes, or into nothing when the
//! page range is not positive.

use serde::{Deserialize, Serialize};

use super::nodes::{Node, PaginationFragment};

pub const DEFAULT_PREVIOUS_TEXT: &str = "previous";
pub const DEFAULT_NEXT_TEXT: &str = "next";

const SEPARATOR: &str = " | ";

/// Layout variant of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    /// One entry per page.
    #[default]
    Default,
    /// `page N out of M`.
    XOutOfY,
    /// `page N`, with the previous/next placeholders dropped at the edges.
    Mcss,
}

impl PaginationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            PaginationStyle::Default => "default",
            PaginationStyle::XOutOfY => "x_out_of_y",
            PaginationStyle::Mcss => "mcss",
        }
    }

    /// Resolve an option value. Unrecognised values select [`PaginationStyle::Default`].
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("x_out_of_y") => PaginationStyle::XOutOfY,
            Some("mcss") => PaginationStyle::Mcss,
            _ => PaginationStyle::Default,
        }
    }

    fn is_mcss(self) -> bool {
        matches!(self, PaginationStyle::Mcss)
    }
}

/// Parameters of a single pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub base_url: String,
    pub page_number: i64,
    pub total_pages: i64,
    pub previous_text: String,
    pub next_text: String,
    pub style: PaginationStyle,
}

impl PaginationRequest {
    pub fn new(base_url: impl Into<String>, page_number: i64, total_pages: i64) -> Self {
        Self {
            base_url: base_url.into(),
            page_number,
            total_pages,
            previous_text: DEFAULT_PREVIOUS_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
            style: PaginationStyle::Default,
        }
    }

    pub fn with_previous_text(mut self, previous_text: impl Into<String>) -> Self {
        self.previous_text = previous_text.into();
        self
    }

    pub fn with_next_text(mut self, next_text: impl Into<String>) -> Self {
        self.next_text = next_text.into();
        self
    }

    pub fn with_style(mut self, style: PaginationStyle) -> Self {
        self.style = style;
        self
    }

    /// Both the current page and the page count must be at least 1.
    pub fn has_valid_range(&self) -> bool {
        self.page_number >= 1 && self.total_pages >= 1
    }
}

/// URL of `page` under `base_url`: the base itself for page 1, `{base_url}/{page}/` otherwise.
pub fn page_url(base_url: &str, page: i64) -> String {
    if page == 1 {
        base_url.to_string()
    } else {
        format!("{base_url}/{page}/")
    }
}

/// Render the pagination bar, or `None` when the request has no valid page range.
pub fn render(request: &PaginationRequest) -> Option<PaginationFragment> {
    if !request.has_valid_range() {
        return None;
    }

    let PaginationRequest {
        base_url,
        page_number,
        total_pages,
        previous_text,
        next_text,
        style,
    } = request;
    let (page_number, total_pages, style) = (*page_number, *total_pages, *style);

    let mut nodes = Vec::new();

    let previous_label = format!("« {previous_text}");
    if page_number == 1 {
        if !style.is_mcss() {
            nodes.push(Node::text(previous_label));
        }
    } else {
        nodes.push(Node::link(
            previous_label,
            page_url(base_url, page_number - 1),
        ));
    }

    if !style.is_mcss() || page_number != 1 {
        nodes.push(Node::text(SEPARATOR));
    }

    match style {
        PaginationStyle::Default => {
            for page in 1..=total_pages {
                if page == page_number {
                    nodes.push(Node::text(page.to_string()));
                } else {
                    nodes.push(Node::link(page.to_string(), page_url(base_url, page)));
                }
                nodes.push(Node::text(SEPARATOR));
            }
        }
        PaginationStyle::XOutOfY | PaginationStyle::Mcss => {
            let body = if style.is_mcss() {
                format!("page {page_number}")
            } else {
                format!("page {page_number} out of {total_pages}")
            };
            nodes.push(Node::text(body));

            if !style.is_mcss() || page_number != total_pages {
                nodes.push(Node::text(SEPARATOR));
            }
        }
    }

    let next_label = format!("{next_text} »");
    if page_number == total_pages {
        if !style.is_mcss() {
            nodes.push(Node::text(next_label));
        }
    } else {
        nodes.push(Node::link(
            next_label,
            page_url(base_url, page_number.saturating_add(1)),
        ));
    }

    Some(PaginationFragment::new(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nodes::PAGINATION_CLASS;

    fn rendered(request: &PaginationRequest) -> Vec<Node> {
        render(request).expect("valid range renders").nodes().to_vec()
    }

    #[test]
    fn non_positive_range_renders_nothing() {
        for (page, total) in [(0, 3), (-1, 3), (2, 0), (1, -5), (0, 0)] {
            let request = PaginationRequest::new("/blog", page, total);
            assert!(render(&request).is_none(), "page {page} of {total}");
        }
    }

    #[test]
    fn valid_range_is_wrapped_in_pagination_container() {
        for style in [
            PaginationStyle::Default,
            PaginationStyle::XOutOfY,
            PaginationStyle::Mcss,
        ] {
            let request = PaginationRequest::new("/blog", 2, 4).with_style(style);
            let fragment = render(&request).expect("fragment");
            assert_eq!(fragment.class(), PAGINATION_CLASS);
            assert!(!fragment.nodes().is_empty());
        }
    }

    #[test]
    fn single_page_default_has_no_links() {
        let nodes = rendered(&PaginationRequest::new("/blog", 1, 1));
        assert_eq!(
            nodes,
            vec![
                Node::text("« previous"),
                Node::text(" | "),
                Node::text("1"),
                Node::text(" | "),
                Node::text("next »"),
            ]
        );
    }

    #[test]
    fn middle_page_default_links_neighbours() {
        let nodes = rendered(&PaginationRequest::new("/blog", 2, 3));
        assert_eq!(
            nodes,
            vec![
                Node::link("« previous", "/blog"),
                Node::text(" | "),
                Node::link("1", "/blog"),
                Node::text(" | "),
                Node::text("2"),
                Node::text(" | "),
                Node::link("3", "/blog/3/"),
                Node::text(" | "),
                Node::link("next »", "/blog/3/"),
            ]
        );
    }

    #[test]
    fn mcss_first_page_drops_previous_segment() {
        let request = PaginationRequest::new("/b", 1, 5).with_style(PaginationStyle::Mcss);
        assert_eq!(
            rendered(&request),
            vec![
                Node::text("page 1"),
                Node::text(" | "),
                Node::link("next »", "/b/2/"),
            ]
        );
    }

    #[test]
    fn mcss_last_page_drops_next_segment() {
        let request = PaginationRequest::new("/b", 5, 5).with_style(PaginationStyle::Mcss);
        assert_eq!(
            rendered(&request),
            vec![
                Node::link("« previous", "/b/4/"),
                Node::text(" | "),
                Node::text("page 5"),
            ]
        );
    }

    #[test]
    fn mcss_single_page_is_only_the_body() {
        let request = PaginationRequest::new("/b", 1, 1).with_style(PaginationStyle::Mcss);
        assert_eq!(rendered(&request), vec![Node::text("page 1")]);
    }

    #[test]
    fn x_out_of_y_last_page_keeps_plain_next() {
        let request = PaginationRequest::new("/b", 3, 3).with_style(PaginationStyle::XOutOfY);
        assert_eq!(
            rendered(&request),
            vec![
                Node::link("« previous", "/b/2/"),
                Node::text(" | "),
                Node::text("page 3 out of 3"),
                Node::text(" | "),
                Node::text("next »"),
            ]
        );
    }

    #[test]
    fn custom_labels_wrap_arrows() {
        let request = PaginationRequest::new("/news", 2, 2)
            .with_previous_text("newer")
            .with_next_text("older")
            .with_style(PaginationStyle::XOutOfY);
        let nodes = rendered(&request);
        assert_eq!(nodes.first(), Some(&Node::link("« newer", "/news")));
        assert_eq!(nodes.last(), Some(&Node::text("older »")));
    }

    #[test]
    fn unknown_style_option_matches_default() {
        let fallback = PaginationStyle::from_option(Some("fancy"));
        assert_eq!(fallback, PaginationStyle::Default);
        assert_eq!(PaginationStyle::from_option(None), PaginationStyle::Default);
        assert_eq!(PaginationStyle::from_option(Some("MCSS")), PaginationStyle::Default);

        let defaulted = PaginationRequest::new("/blog", 3, 6).with_style(fallback);
        let explicit = PaginationRequest::new("/blog", 3, 6);
        assert_eq!(render(&defaulted), render(&explicit));
    }

    #[test]
    fn style_option_round_trips_through_as_str() {
        for style in [
            PaginationStyle::Default,
            PaginationStyle::XOutOfY,
            PaginationStyle::Mcss,
        ] {
            assert_eq!(PaginationStyle::from_option(Some(style.as_str())), style);
        }
    }

    #[test]
    fn every_link_follows_the_url_pattern() {
        let request = PaginationRequest::new("/archive", 4, 7);
        let fragment = render(&request).expect("fragment");
        for link in fragment.links() {
            let target = link.target_url().expect("link target");
            let page: i64 = match link.content() {
                "« previous" => 3,
                "next »" => 5,
                number => number.parse().expect("numbered link"),
            };
            if page == 1 {
                assert_eq!(target, "/archive");
            } else {
                assert_eq!(target, format!("/archive/{page}/"));
            }
        }
        assert_eq!(fragment.links().count(), 8);
    }

    #[test]
    fn page_past_the_end_falls_through() {
        let nodes = rendered(&PaginationRequest::new("/blog", 4, 2));
        assert_eq!(nodes.first(), Some(&Node::link("« previous", "/blog/3/")));
        assert_eq!(nodes.last(), Some(&Node::link("next »", "/blog/5/")));
        assert!(!nodes.iter().any(|node| node == &Node::text("4")));
    }

    #[test]
    fn rendering_is_repeatable() {
        let request = PaginationRequest::new("/blog", 2, 9).with_style(PaginationStyle::XOutOfY);
        assert_eq!(render(&request), render(&request));
    }
}
