use prospector::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Export prospect leads to CRM import files and render prospect reports"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: prospector::Global,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Export leads to a CRM import layout (salesforce, hubspot, pipedrive, generic-csv)
    Export(prospector::export::ExportOptions),

    /// Render a prospect report (markdown, json, csv, html)
    Report(prospector::report::ReportOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let result = prospector::cli::parse_args::<App>().and_then(|app| match app.command {
        SubCommands::Export(options) => prospector::export::run(options, app.global),
        SubCommands::Report(options) => prospector::report::run(options, app.global),
    });

    prospector::cli::exit_on_user_error(result)
}
