use crate::domain::{
    nodes::PaginationFragment,
    pagination::{
        DEFAULT_NEXT_TEXT, DEFAULT_PREVIOUS_TEXT, PaginationRequest, PaginationStyle, render,
    },
};

use super::{
    Directive, DirectiveError,
    invocation::{DirectiveInvocation, DirectiveSpec, OptionSpec, OptionValue},
};

pub const PAGINATION_DIRECTIVE: &str = "pagination";
/// Name the directive is known by in existing jcm documents.
pub const JCM_PAGINATION_DIRECTIVE: &str = "jcm-pagination";

const PAGE_NUMBER: &str = "page_number";
const TOTAL_PAGES: &str = "total_pages";
const PREVIOUS_TEXT: &str = "previous_text";
const NEXT_TEXT: &str = "next_text";
const STYLE: &str = "style";

const SPEC: DirectiveSpec = DirectiveSpec {
    name: PAGINATION_DIRECTIVE,
    required_arguments: 1,
    optional_arguments: 0,
    options: &[
        OptionSpec {
            name: PAGE_NUMBER,
            value: OptionValue::UnchangedRequired,
            required: true,
        },
        OptionSpec {
            name: TOTAL_PAGES,
            value: OptionValue::UnchangedRequired,
            required: true,
        },
        OptionSpec {
            name: PREVIOUS_TEXT,
            value: OptionValue::Unchanged,
            required: false,
        },
        OptionSpec {
            name: NEXT_TEXT,
            value: OptionValue::Unchanged,
            required: false,
        },
        OptionSpec {
            name: STYLE,
            value: OptionValue::Unchanged,
            required: false,
        },
    ],
    has_content: false,
};

/// Renders a previous/next pagination bar for the base URL given as argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationDirective;

impl Directive for PaginationDirective {
    fn spec(&self) -> &DirectiveSpec {
        &SPEC
    }

    fn run(
        &self,
        invocation: &DirectiveInvocation,
    ) -> Result<Vec<PaginationFragment>, DirectiveError> {
        let base_url = invocation
            .argument(0)
            .ok_or(DirectiveError::InvalidArguments {
                minimum: SPEC.required_arguments,
                maximum: SPEC.required_arguments,
                supplied: 0,
            })?;

        // total_pages is only read once page_number is known to be in range.
        let page_number = integer_option(invocation, PAGE_NUMBER)?;
        if page_number < 1 {
            return Ok(Vec::new());
        }
        let total_pages = integer_option(invocation, TOTAL_PAGES)?;
        if total_pages < 1 {
            return Ok(Vec::new());
        }

        let request = PaginationRequest::new(base_url, page_number, total_pages)
            .with_previous_text(
                invocation
                    .option(PREVIOUS_TEXT)
                    .unwrap_or(DEFAULT_PREVIOUS_TEXT),
            )
            .with_next_text(invocation.option(NEXT_TEXT).unwrap_or(DEFAULT_NEXT_TEXT))
            .with_style(PaginationStyle::from_option(invocation.option(STYLE)));

        Ok(render(&request).into_iter().collect())
    }
}

fn integer_option(
    invocation: &DirectiveInvocation,
    option: &'static str,
) -> Result<i64, DirectiveError> {
    let raw = invocation
        .option(option)
        .ok_or(DirectiveError::MissingOption { option })?;
    parse_integer(raw).ok_or_else(|| DirectiveError::InvalidNumber {
        option,
        value: raw.to_string(),
    })
}

/// Parse a decimal integer, allowing single underscores between digits (`1_000`).
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.contains('_') {
        let bytes = trimmed.as_bytes();
        let grouped = bytes.iter().enumerate().all(|(index, byte)| {
            *byte != b'_'
                || (index > 0
                    && bytes[index - 1].is_ascii_digit()
                    && bytes.get(index + 1).is_some_and(u8::is_ascii_digit))
        });
        if !grouped {
            return None;
        }
        return trimmed.replace('_', "").parse().ok();
    }
    trimmed.parse().ok()
}
