//! Legal practice areas used to classify time entries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Practice area a unit of billable work belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeArea {
    Corporate,
    Litigation,
    Contract,
    RealEstate,
    Family,
    Criminal,
    Employment,
    Ip,
    /// No keyword matched.
    #[default]
    General,
}

impl PracticeArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Litigation => "litigation",
            Self::Contract => "contract",
            Self::RealEstate => "real_estate",
            Self::Family => "family",
            Self::Criminal => "criminal",
            Self::Employment => "employment",
            Self::Ip => "ip",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PracticeArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "corporate" => Ok(Self::Corporate),
            "litigation" => Ok(Self::Litigation),
            "contract" => Ok(Self::Contract),
            "real_estate" | "real-estate" | "realestate" => Ok(Self::RealEstate),
            "family" => Ok(Self::Family),
            "criminal" => Ok(Self::Criminal),
            "employment" => Ok(Self::Employment),
            "ip" => Ok(Self::Ip),
            "general" => Ok(Self::General),
            other => Err(Error::UnknownPracticeArea(other.to_string())),
        }
    }
}
