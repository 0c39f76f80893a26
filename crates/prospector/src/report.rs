use std::path::PathBuf;

use chrono::Local;
use prospector_core::report::{render_report, ReportContext, ReportFormat};
use serde_json::Value;

use crate::input::{read_document, InputSummary};
use crate::output::emit;
use crate::prelude::{eprintln, *};

#[derive(Debug, clap::Args, Clone)]
pub struct ReportOptions {
    /// Prospect JSON file with `persons`, `companies` and optional `export_metadata`
    #[clap(env = "PROSPECTOR_INPUT")]
    pub input: PathBuf,

    /// Report format: markdown (alias: md), json, csv, html
    #[clap(env = "PROSPECTOR_FORMAT")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[clap(env = "PROSPECTOR_OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn run(options: ReportOptions, global: crate::Global) -> Result<()> {
    let format = parse_format(&options.format)?;
    let document = read_document(&options.input)?;

    if global.verbose {
        eprintln!(
            "Read {} from {}",
            InputSummary::of(&document),
            options.input.display()
        );
        eprintln!("Report format: {format}");
    }

    let context = ReportContext::new(Local::now().date_naive());
    let rendered = format_document(format, &document, &context)?;
    emit(&rendered, options.output.as_deref(), "Written")
}

/// Resolve a format name, reporting unknown names as a user error.
pub fn parse_format(name: &str) -> Result<ReportFormat> {
    name.parse::<ReportFormat>()
        .map_err(|err| Error::UnknownFormat(err.to_string()).into())
}

pub fn format_document(
    format: ReportFormat,
    document: &Value,
    context: &ReportContext,
) -> Result<String> {
    log::debug!("Rendering {} as {format}", InputSummary::of(document));

    render_report(format, document, context)
        .map_err(|e| eyre!("Failed to render {format} report: {e}"))
}
