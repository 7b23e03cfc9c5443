use serde::{Deserialize, Serialize};

use crate::domain::reason::Reason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Outcome of validating one submitted code.
///
/// Invariant: `is_applicable == false` exactly when `reason` is present.
pub struct ValidationResult {
    /// Whether the order may proceed, independent of discount status.
    pub is_applicable: bool,
    /// Whether the code was recognized as partner-format.
    pub is_fealtyx_discount_code: bool,
    pub reason: Option<Reason>,
}

impl ValidationResult {
    /// The code is not one of ours; checkout proceeds without a partner discount.
    pub const fn not_partner_code() -> Self {
        Self {
            is_applicable: true,
            is_fealtyx_discount_code: false,
            reason: None,
        }
    }

    /// Partner-format code that verified for this domain and phone number.
    pub const fn verified() -> Self {
        Self {
            is_applicable: true,
            is_fealtyx_discount_code: true,
            reason: None,
        }
    }

    /// Partner-format code that must not be applied.
    pub const fn rejected(reason: Reason) -> Self {
        Self {
            is_applicable: false,
            is_fealtyx_discount_code: true,
            reason: Some(reason),
        }
    }

    /// `true` for a partner-format code that passed verification.
    pub fn is_verified(&self) -> bool {
        self.is_applicable && self.is_fealtyx_discount_code
    }
}
