//! Supported statement issuers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// Closed set of statement layouts the parsers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuerVariant {
    #[serde(rename = "bni")]
    Bni,
    #[serde(rename = "bri")]
    Bri,
    #[serde(rename = "mandiri")]
    Mandiri,
    #[serde(rename = "seabank")]
    Seabank,
    #[serde(rename = "jenius")]
    Jenius,
}

impl IssuerVariant {
    /// Default classification priority.
    pub const ALL: [IssuerVariant; 5] = [
        IssuerVariant::Bni,
        IssuerVariant::Bri,
        IssuerVariant::Mandiri,
        IssuerVariant::Seabank,
        IssuerVariant::Jenius,
    ];

    /// Short machine name used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            IssuerVariant::Bni => "bni",
            IssuerVariant::Bri => "bri",
            IssuerVariant::Mandiri => "mandiri",
            IssuerVariant::Seabank => "seabank",
            IssuerVariant::Jenius => "jenius",
        }
    }

    pub fn bank_name(&self) -> &'static str {
        match self {
            IssuerVariant::Bni => "Bank Negara Indonesia",
            IssuerVariant::Bri => "Bank Rakyat Indonesia",
            IssuerVariant::Mandiri => "Bank Mandiri",
            IssuerVariant::Seabank => "SeaBank Indonesia",
            IssuerVariant::Jenius => "Jenius (SMBC Indonesia)",
        }
    }
}

impl fmt::Display for IssuerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IssuerVariant {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        IssuerVariant::ALL
            .into_iter()
            .find(|v| v.key() == wanted)
            .ok_or_else(|| {
                let keys: Vec<&str> = IssuerVariant::ALL.iter().map(|v| v.key()).collect();
                UnknownNameError::new("issuer", s, &keys)
            })
    }
}
