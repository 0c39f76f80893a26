use std::ffi::OsString;

use clap::error::ErrorKind;

use crate::prelude::{println, *};

/// Parse the process arguments for `T`.
///
/// See [`parse_args_from`].
pub fn parse_args<T: clap::Parser>() -> Result<T> {
    parse_args_from(std::env::args_os())
}

/// Parse `args` for `T`, turning every clap failure into [`Error::Usage`].
///
/// `--help` and `--version` still print and exit the way clap does.
pub fn parse_args_from<T, I, A>(args: I) -> Result<T>
where
    T: clap::Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(app) => Ok(app),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => Err(Error::Usage(err.render().to_string()).into()),
    }
}

/// Message to print for errors the user can fix by changing the arguments.
pub fn user_error_message(report: &color_eyre::eyre::Report) -> Option<String> {
    report.downcast_ref::<Error>().map(ToString::to_string)
}

/// Print user errors on stdout and exit with status 1.
///
/// Any other error is handed back so `main` returns it and color-eyre reports
/// it.
pub fn exit_on_user_error(result: Result<()>) -> Result<()> {
    match result {
        Err(report) => match user_error_message(&report) {
            Some(message) => {
                println!("{message}");
                std::process::exit(Error::EXIT_CODE)
            }
            None => Err(report),
        },
        Ok(()) => Ok(()),
    }
}
