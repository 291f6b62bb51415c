//! Command failures and their exit codes

use thiserror::Error;

use gssh_api::ValidationError;
use gssh_client::ClientError;

/// Exit code for configuration, I/O and other setup failures
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for input rejected before any call was made
pub const EXIT_VALIDATION: u8 = 2;
/// Exit code for a call answered with a non-zero `RetCode`
pub const EXIT_SERVICE: u8 = 3;
/// Exit code for a call that never produced a response
pub const EXIT_TRANSPORT: u8 = 4;
/// Exit code for a batch where some calls failed and others did not
pub const EXIT_PARTIAL: u8 = 5;

/// Why a command did not fully succeed
///
/// The `Display` form of each single-call variant is the exact line shown
/// to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Input rejected locally, nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API client could not complete the call
    #[error("Error: {0}")]
    Transport(#[from] ClientError),

    /// The service answered with a non-zero `RetCode`
    #[error("Something wrong. RetCode:{code}, Message:{message}")]
    Service {
        /// `RetCode` from the response
        code: i32,
        /// `Message` from the response
        message: String,
    },

    /// Some calls of a multi-call command failed; each was already reported
    #[error("{} of {total} calls failed", .failures.len())]
    Batch {
        /// Failures in dispatch order
        failures: Vec<CommandError>,
        /// Number of calls attempted
        total: usize,
    },

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Process exit code for this failure
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Validation(_) => EXIT_VALIDATION,
            CommandError::Service { .. } => EXIT_SERVICE,
            CommandError::Transport(_) => EXIT_TRANSPORT,
            CommandError::Io(_) => EXIT_FAILURE,
            CommandError::Batch { failures, total } => {
                let mut codes = failures.iter().map(CommandError::exit_code);
                match codes.next() {
                    Some(first) if failures.len() == *total && codes.all(|c| c == first) => first,
                    _ => EXIT_PARTIAL,
                }
            }
        }
    }

    /// Whether the failure has already been written to the output
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(self, CommandError::Batch { .. } | CommandError::Io(_))
    }
}
