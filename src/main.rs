use std::{
    io::{self, Write},
    path::Path,
    process,
};

use folio::{
    application::{
        article::ArticleService,
        error::AppError,
        render::{RenderPipelineConfig, configure_element_renderer},
    },
    config,
    domain::elements::{QUALIFIED_TAG_PREFIX, SUPPORTED_TAGS},
    infra::{document::load_document, error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();

    if dispatcher::has_been_set() {
        error!(
            source = report.source,
            reason = error.reason(),
            chain = ?report.messages,
            "application error"
        );
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(
            source = report.source,
            reason = error.reason(),
            chain = ?report.messages,
            "application error"
        );
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        AppError::from(InfraError::configuration(format!(
            "failed to load configuration: {err}"
        )))
    })?;

    telemetry::init(&settings.logging)?;
    configure_element_renderer(RenderPipelineConfig::from(&settings.render))
        .map_err(|err| AppError::unexpected(err.to_string()))?;

    match cli_args.command {
        config::Command::Render(args) => run_render(&settings, &args.file),
        config::Command::Elements(args) => run_elements(&settings, &args.file),
        config::Command::Tags => run_tags(),
    }
}

fn run_render(settings: &config::Settings, file: &Path) -> Result<(), AppError> {
    let document = load_document(file)?;
    let html = ArticleService::shared(settings.site.title.clone()).render_html(&document)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}").map_err(InfraError::from)?;
    Ok(())
}

fn run_elements(settings: &config::Settings, file: &Path) -> Result<(), AppError> {
    let document = load_document(file)?;
    let fragments = ArticleService::shared(settings.site.title.clone()).render_body(&document)?;

    let mut stdout = io::stdout().lock();
    for fragment in fragments {
        writeln!(stdout, "{fragment}").map_err(InfraError::from)?;
    }
    Ok(())
}

fn run_tags() -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    for tag in SUPPORTED_TAGS {
        writeln!(stdout, "{tag}\t{QUALIFIED_TAG_PREFIX}{tag}").map_err(InfraError::from)?;
    }
    Ok(())
}
