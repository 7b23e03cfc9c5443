use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Why a submitted code was not accepted.
///
/// Only [`Reason::InvalidDomain`] and [`Reason::VoucherNotEligible`] are produced by the
/// validator today; the remaining variants are reserved.
pub enum Reason {
    #[serde(rename = "Code Too Short")]
    CodeTooShort,
    #[serde(rename = "Invalid Domain")]
    InvalidDomain,
    #[serde(rename = "Voucher Not Eligible For The User")]
    VoucherNotEligible,
    #[serde(rename = "Invalid Phone Number")]
    InvalidPhone,
    #[serde(rename = "Invalid Order Amount")]
    InvalidOrderAmount,
}

impl Reason {
    /// Every reason, in declaration order.
    pub const ALL: [Reason; 5] = [
        Self::CodeTooShort,
        Self::InvalidDomain,
        Self::VoucherNotEligible,
        Self::InvalidPhone,
        Self::InvalidOrderAmount,
    ];

    /// Display string, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CodeTooShort => "Code Too Short",
            Self::InvalidDomain => "Invalid Domain",
            Self::VoucherNotEligible => "Voucher Not Eligible For The User",
            Self::InvalidPhone => "Invalid Phone Number",
            Self::InvalidOrderAmount => "Invalid Order Amount",
        }
    }

    /// Display string of an optional reason.
    pub fn display_opt(reason: Option<Self>) -> Option<&'static str> {
        reason.map(Self::as_str)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reason {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownReason {
                input: s.to_owned(),
            })
    }
}

/// Convert an optional reason string into an owned display value.
///
/// Absent and empty input both map to `None`; anything else is returned as-is.
pub fn reason_string(reason: Option<&str>) -> Option<String> {
    match reason {
        None | Some("") => None,
        Some(value) => Some(value.to_owned()),
    }
}
