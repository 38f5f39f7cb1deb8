use ariadne::Source;
use bool_simplify::TooManyVariables;
use std::{fmt, io, path::PathBuf};

/// Errors that can occur while handling one line of input.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Parse(bool_error::Error),

    /// Writing an export file failed.
    Export(PathBuf, io::Error),

    /// The record could not be serialized.
    Json(serde_json::Error),

    /// A truth table was requested for an expression with too many variables.
    Table(TooManyVariables),

    /// `:export` or `:table` was used before anything was simplified.
    NoResult,
}

impl Error {
    /// Report the error to stderr.
    ///
    /// Parse errors are rendered as an [`ariadne::Report`] pointing into `input`; everything else
    /// is logged.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    log::error!("{} ({})", err, io_err);
                }
            },
            _ => log::error!("{}", self),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{}", err),
            Self::Export(path, err) => write!(f, "could not write `{}`: {}", path.display(), err),
            Self::Json(err) => write!(f, "could not serialize record: {}", err),
            Self::Table(err) => write!(f, "{}", err),
            Self::NoResult => write!(f, "nothing has been simplified yet"),
        }
    }
}

impl From<bool_error::Error> for Error {
    fn from(err: bool_error::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<TooManyVariables> for Error {
    fn from(err: TooManyVariables) -> Self {
        Self::Table(err)
    }
}
