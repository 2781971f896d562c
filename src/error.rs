//! Error taxonomy and process exit-code mapping
//!
//! Every error here is terminal for the process. Usage errors never reach
//! this type; clap reports them and the driver exits with 64 (EX_USAGE).
//! An empty or non-array feed is not an error and exits with 0.

use thiserror::Error;

/// Exit code for API errors (HTTP status >= 400)
pub const EXIT_API_ERROR: i32 = 1;
/// Exit code for transport-level failures
pub const EXIT_NETWORK_ERROR: i32 = 2;
/// Exit code for an unparsable response body
pub const EXIT_PARSE_ERROR: i32 = 3;
/// Exit code for usage errors, reported by clap
pub const EXIT_USAGE: i32 = 64;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered with a failure status. `message` carries the API's
    /// own explanation when the body had one.
    #[error("HTTP {status} from GitHub API.{}", .message.as_deref().map(|m| format!(" {m}")).unwrap_or_default())]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// A successful response whose body was not valid JSON.
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Network(_) => EXIT_NETWORK_ERROR,
            Error::Api { .. } => EXIT_API_ERROR,
            Error::Parse(_) => EXIT_PARSE_ERROR,
        }
    }
}
