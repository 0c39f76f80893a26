use prospector::prelude::*;

/// Export leads to CRM-compatible CSV layouts.
#[derive(Debug, clap::Parser)]
#[command(name = "export-leads", version)]
struct App {
    #[clap(flatten)]
    options: prospector::export::ExportOptions,

    #[clap(flatten)]
    global: prospector::Global,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let result = prospector::cli::parse_args::<App>()
        .and_then(|app| prospector::export::run(app.options, app.global));

    prospector::cli::exit_on_user_error(result)
}
