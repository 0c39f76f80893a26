use std::path::PathBuf;

use prospector_core::export::{render_export, ExportFormat};
use prospector_core::record::ProspectData;
use serde_json::Value;

use crate::input::{read_document, InputSummary};
use crate::output::emit;
use crate::prelude::{eprintln, *};

#[derive(Debug, clap::Args, Clone)]
pub struct ExportOptions {
    /// Prospect JSON file with `persons` and `companies`
    #[clap(env = "PROSPECTOR_INPUT")]
    pub input: PathBuf,

    /// Export format: salesforce, hubspot, pipedrive, generic-csv (alias: generic)
    #[clap(env = "PROSPECTOR_FORMAT")]
    pub format: String,

    /// Write the export to this file instead of stdout
    #[clap(env = "PROSPECTOR_OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    let format = parse_format(&options.format)?;
    let document = read_document(&options.input)?;

    if global.verbose {
        eprintln!(
            "Read {} from {}",
            InputSummary::of(&document),
            options.input.display()
        );
        eprintln!("Export format: {format}");
    }

    let rendered = export_document(format, &document)?;
    emit(&rendered, options.output.as_deref(), "Exported")
}

/// Resolve a format name, reporting unknown names as a user error.
pub fn parse_format(name: &str) -> Result<ExportFormat> {
    name.parse::<ExportFormat>()
        .map_err(|err| Error::UnknownFormat(err.to_string()).into())
}

/// Map every person (and for the generic layout every company) to CSV rows.
pub fn export_document(format: ExportFormat, document: &Value) -> Result<String> {
    let data = ProspectData::from_json(document)
        .context("Prospect data does not match the expected record shape")?;

    log::debug!(
        "Exporting {} persons and {} companies as {format}",
        data.persons.len(),
        data.companies.len()
    );

    render_export(format, &data).map_err(|e| eyre!("Failed to render {format} export: {e}"))
}
