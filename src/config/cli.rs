use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the pagebar binary.
#[derive(Debug, Parser)]
#[command(
    name = "pagebar",
    version,
    about = "Render pagination bars and markdown documents that embed them"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "PAGEBAR_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a markdown document, expanding pagination blocks.
    Render(RenderArgs),
    /// Render a single pagination bar.
    Bar(BarArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Emit the formatted HTML without running the sanitizer.
    #[arg(long = "no-sanitize", action = clap::ArgAction::SetTrue)]
    pub no_sanitize: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub overrides: RenderOverrides,

    /// Markdown document to render.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Write the HTML to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<div class="m-article-pagination">` markup.
    #[default]
    Html,
    /// The node tree as JSON.
    Json,
}

#[derive(Debug, Args, Clone)]
pub struct BarArgs {
    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// URL of the first page; later pages live at `<BASE_URL>/<page>/`.
    #[arg(value_name = "BASE_URL")]
    pub base_url: String,

    /// Current page, starting at 1.
    #[arg(long = "page-number", value_name = "N", allow_hyphen_values = true)]
    pub page_number: String,

    /// Total number of pages.
    #[arg(long = "total-pages", value_name = "N", allow_hyphen_values = true)]
    pub total_pages: String,

    /// Label of the previous link.
    #[arg(long = "previous-text", value_name = "TEXT")]
    pub previous_text: Option<String>,

    /// Label of the next link.
    #[arg(long = "next-text", value_name = "TEXT")]
    pub next_text: Option<String>,

    /// Layout: default, x_out_of_y or mcss. Other values select default.
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}
