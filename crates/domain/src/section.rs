//! Top-level sections of the service taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The three branches of the directory: construction trades, design
/// professions, and home-finance services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainSection {
    /// Construction and maintenance trades.
    Build,
    /// Architecture and interior design professions.
    Design,
    /// Financing, insurance, and valuation services.
    Finance,
}

impl MainSection {
    /// All sections in stable display order.
    pub const ALL: &'static [MainSection] =
        &[MainSection::Build, MainSection::Design, MainSection::Finance];

    /// Human-readable display name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            MainSection::Build => "Build",
            MainSection::Design => "Design",
            MainSection::Finance => "Finance",
        }
    }
}

impl fmt::Display for MainSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MainSection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "build" => Ok(MainSection::Build),
            "design" => Ok(MainSection::Design),
            "finance" => Ok(MainSection::Finance),
            _ => Err(ValidationError::UnknownSection(s.to_string())),
        }
    }
}
