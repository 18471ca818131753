use std::process;

use pagebar::{
    application::{
        directive::{DirectiveInvocation, DirectiveRegistry, PAGINATION_DIRECTIVE},
        error::AppError,
        render::{RenderRequest, RenderService, render_service},
    },
    config::{self, BarArgs, OutputFormat, RenderArgs},
    infra::{error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, debug, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();
    let log = || {
        error!(
            source = report.source,
            document_error = error.is_document_error(),
            causes = ?report.messages,
            "{error}"
        );
    };

    if dispatcher::has_been_set() {
        log();
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, log);
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match cli_args.command {
        config::Command::Render(args) => run_render(settings, args).await,
        config::Command::Bar(args) => run_bar(args),
    }
}

async fn run_render(settings: config::Settings, args: RenderArgs) -> Result<(), AppError> {
    let markdown = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(InfraError::from)?;

    let document = args.file.display().to_string();
    let request = RenderRequest::new(document.as_str(), markdown);
    let renderer = render_service();

    let output = if settings.render.sanitize {
        renderer.render(&request)?
    } else {
        renderer.render_unsanitized(&request)?
    };

    info!(
        target = "pagebar::render",
        document = document.as_str(),
        sanitized = settings.render.sanitize,
        directives_run = output.directives_run,
        fragments_rendered = output.fragments_rendered,
        html_bytes = output.html.len(),
        "Document rendered"
    );

    match args.output {
        Some(path) => tokio::fs::write(&path, output.html)
            .await
            .map_err(InfraError::from)?,
        None => print!("{}", output.html),
    }

    Ok(())
}

fn run_bar(args: BarArgs) -> Result<(), AppError> {
    let mut invocation = DirectiveInvocation::new()
        .with_argument(args.base_url)
        .with_option("page_number", args.page_number)
        .with_option("total_pages", args.total_pages);
    if let Some(text) = args.previous_text {
        invocation = invocation.with_option("previous_text", text);
    }
    if let Some(text) = args.next_text {
        invocation = invocation.with_option("next_text", text);
    }
    if let Some(style) = args.style {
        invocation = invocation.with_option("style", style);
    }

    let registry = DirectiveRegistry::with_builtin();
    let fragments = registry
        .run(PAGINATION_DIRECTIVE, &invocation)?
        .ok_or_else(|| AppError::unexpected("pagination directive is not registered"))?;

    let Some(fragment) = fragments.first() else {
        debug!(target = "pagebar::bar", "Page range is empty; nothing to render");
        return Ok(());
    };

    match args.format {
        OutputFormat::Html => println!("{}", fragment.to_html()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(fragment).map_err(InfraError::from)?;
            println!("{json}");
        }
    }

    Ok(())
}
