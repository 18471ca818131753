//! Named extension points invoked from documents.
//!
//! A directive declares its arguments and options through a [`DirectiveSpec`]
//! and turns a validated [`DirectiveInvocation`] into document fragments.
//! Directives become invokable once inserted into a [`DirectiveRegistry`].

mod invocation;
mod pagination;
mod registry;

use thiserror::Error;

use crate::domain::nodes::PaginationFragment;

pub use invocation::{DirectiveInvocation, DirectiveSpec, OptionSpec, OptionValue};
pub use pagination::{JCM_PAGINATION_DIRECTIVE, PAGINATION_DIRECTIVE, PaginationDirective};
pub use registry::{DirectiveRegistry, register};

/// Failures raised while validating or running a directive invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("expected between {minimum} and {maximum} argument(s), {supplied} supplied")]
    InvalidArguments {
        minimum: usize,
        maximum: usize,
        supplied: usize,
    },
    #[error("unknown option `{option}`")]
    UnknownOption { option: String },
    #[error("duplicate option `{option}`")]
    DuplicateOption { option: String },
    #[error("option `{option}` requires a value")]
    MissingOptionValue { option: &'static str },
    #[error("missing required option `{option}`")]
    MissingOption { option: &'static str },
    #[error("no content permitted, found `{line}`")]
    UnexpectedContent { line: String },
    #[error("option `{option}` must be an integer, got `{value}`")]
    InvalidNumber { option: &'static str, value: String },
}

/// A document extension point. Implementations must be pure: the same
/// invocation always produces the same fragments or the same error.
pub trait Directive: Send + Sync {
    fn spec(&self) -> &DirectiveSpec;

    /// Produce zero or more fragments for an invocation that passed [`DirectiveSpec::validate`].
    fn run(
        &self,
        invocation: &DirectiveInvocation,
    ) -> Result<Vec<PaginationFragment>, DirectiveError>;
}
