use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client layer.
///
/// The orchestrator treats these very differently: a bad identifier skips
/// one target, a failed connection aborts the whole run, and a failed query
/// only costs the current target its output.
#[derive(Debug)]
pub enum Error {
    /// The argument did not match the `name[@server]` grammar.
    BadIdentifier(String),
    /// Could not reach or authenticate to a server. `code` is the
    /// transport's native error code and becomes the process exit status.
    Connect { server: String, code: i32 },
    /// A capability or status query failed with a server error code.
    Query { code: i32 },
    /// Client configuration could not be read.
    Config(anyhow::Error),
}

impl Error {
    /// Code reported to the operating system when this error ends the run.
    pub fn native_code(&self) -> i32 {
        match self {
            Error::Connect { code, .. } | Error::Query { code } => *code,
            Error::BadIdentifier(_) | Error::Config(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadIdentifier(raw) => {
                write!(f, "illegally formed reservation identifier: {}", raw)
            }
            Error::Connect { server, code } => {
                write!(f, "cannot connect to server {} (err={})", server, code)
            }
            Error::Query { code } => write!(f, "Error {}", code),
            Error::Config(err) => write!(f, "configuration error: {:#}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
