use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::{directive::DirectiveError, render::RenderError},
    config::LoadError,
    infra::error::InfraError,
};

/// Error message chain collected for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Directive(#[from] DirectiveError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Whether the failure stems from document input rather than the environment.
    pub fn is_document_error(&self) -> bool {
        matches!(self, AppError::Render(_) | AppError::Directive(_))
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error("application::error::AppError", self)
    }
}
