//! Port constraint shared by create and modify

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Reserved ports the service refuses to forward
const RESERVED: [i64; 2] = [80, 443];

/// A validated SSH port: `1 < port < 65535`, excluding 80 and 443
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SshPort(u16);

impl SshPort {
    /// Parse a port from command-line text
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidPort`] if the text is not an integer,
    /// or [`ValidationError::PortOutOfRange`] if it violates the constraint.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value: i64 = input
            .parse()
            .map_err(|source| ValidationError::InvalidPort {
                input: input.to_string(),
                source,
            })?;
        Self::try_from(value)
    }

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for SshPort {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 1 || value >= 65535 || RESERVED.contains(&value) {
            return Err(ValidationError::PortOutOfRange(value));
        }
        u16::try_from(value)
            .map(SshPort)
            .map_err(|_| ValidationError::PortOutOfRange(value))
    }
}

impl fmt::Display for SshPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
