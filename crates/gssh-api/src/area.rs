//! Supported GlobalSSH source locations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Location of the source server an instance accelerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    LosAngeles,
    Singapore,
    HongKong,
    Tokyo,
    Washington,
    Frankfurt,
}

impl Area {
    /// Every supported area, in the order they are listed to users
    pub const ALL: [Area; 6] = [
        Area::LosAngeles,
        Area::Singapore,
        Area::HongKong,
        Area::Tokyo,
        Area::Washington,
        Area::Frankfurt,
    ];

    /// Name accepted on the command line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Area::LosAngeles => "LosAngeles",
            Area::Singapore => "Singapore",
            Area::HongKong => "HongKong",
            Area::Tokyo => "Tokyo",
            Area::Washington => "Washington",
            Area::Frankfurt => "Frankfurt",
        }
    }

    /// Location code the API expects in the `Area` field
    #[must_use]
    pub fn location_code(self) -> &'static str {
        match self {
            Area::LosAngeles => "洛杉矶",
            Area::Singapore => "新加坡",
            Area::HongKong => "香港",
            Area::Tokyo => "东京",
            Area::Washington => "华盛顿",
            Area::Frankfurt => "法兰克福",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Area {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|area| area.name() == s)
            .ok_or_else(|| ValidationError::UnknownArea(s.to_string()))
    }
}
