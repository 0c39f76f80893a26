/// Errors that end a run with a plain message on stdout and exit status 1,
/// instead of an error report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    UnknownFormat(String),
}

impl Error {
    pub const EXIT_CODE: i32 = 1;
}
