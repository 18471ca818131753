//! Pagination bars for markdown documents.
//!
//! The [`domain::pagination`] module renders a bar of previous/next and page
//! links as a flat fragment of text and link nodes. The
//! [`application::directive`] layer exposes it as the `pagination` directive,
//! and [`application::render`] expands directive blocks found in markdown.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
