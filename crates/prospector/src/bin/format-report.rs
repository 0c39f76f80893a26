use prospector::prelude::*;

/// Format prospect data into Markdown, JSON, CSV or HTML reports.
#[derive(Debug, clap::Parser)]
#[command(name = "format-report", version)]
struct App {
    #[clap(flatten)]
    options: prospector::report::ReportOptions,

    #[clap(flatten)]
    global: prospector::Global,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let result = prospector::cli::parse_args::<App>()
        .and_then(|app| prospector::report::run(app.options, app.global));

    prospector::cli::exit_on_user_error(result)
}
