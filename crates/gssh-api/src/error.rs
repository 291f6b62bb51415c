//! Validation errors raised before a request leaves the process

use std::num::ParseIntError;

use thiserror::Error;

/// Client-side validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Port string is not an integer
    #[error("invalid port {input:?}: {source}")]
    InvalidPort {
        /// Raw value supplied on the command line
        input: String,
        /// Underlying parse failure
        source: ParseIntError,
    },

    /// Port is outside the accepted range or reserved
    #[error("The port number should be between 1 and 65535, and cannot be equal to 80 or 443")]
    PortOutOfRange(i64),

    /// Area name is not one of the supported locations
    #[error("Area should be one of LosAngeles,Singapore,HongKong,Tokyo,Washington,Frankfurt.")]
    UnknownArea(String),

    /// Modify was asked to change nothing
    #[error("port or remark required")]
    NothingToModify,
}
