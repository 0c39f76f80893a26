//! Imperative shell of the prospector tools: argument parsing, file I/O and
//! output. All record mapping lives in `prospector_core`.

pub mod cli;
pub mod error;
pub mod export;
pub mod input;
pub mod output;
pub mod prelude;
pub mod report;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "PROSPECTOR_VERBOSE", global = true, default_value = "false")]
    pub verbose: bool,
}
