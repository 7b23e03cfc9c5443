//! Classification and verification of partner-issued discount codes.
//!
//! A partner code starts with a known prefix and ends in a four-character block whose
//! last two characters are a checksum of the first two. That structure is checked first
//! without hashing. Only recognized codes are then verified: the block must equal a
//! suffix derived from SHA-256 over the requesting domain and the canonical hash of the
//! customer's phone number.
//!
//! ```rust
//! use flxcode::{DiscountCodeValidator, Reason, ValidationResult};
//!
//! let validator = DiscountCodeValidator::new();
//!
//! let ok = validator.validate("example.com", "+918989898989", "FLX123415EG", 100.0);
//! assert_eq!(ok, ValidationResult::verified());
//!
//! let wrong_shop = validator.validate("example2.com", "+918989898989", "FLX123415EG", 100.0);
//! assert_eq!(wrong_shop.reason, Some(Reason::VoucherNotEligible));
//!
//! let not_ours = validator.validate("example.com", "+918989898989", "SUMMER24", 100.0);
//! assert!(not_ours.is_applicable && !not_ours.is_fealtyx_discount_code);
//! ```
#![forbid(unsafe_code)]

pub mod checksum;
pub mod domain;
pub mod hash;
pub mod validator;

pub use domain::{
    CodePrefix, CountryCode, DiscountCode, Reason, SanitizedDomain, ValidationError,
    ValidationResult, reason_string,
};
pub use hash::{DEFAULT_COUNTRY_CODE, is_sha256_hash, phone_number_hash, sha256_hex};
pub use validator::{
    ConfigError, DEFAULT_PREFIXES, DiscountCodeValidator, DiscountCodeValidatorBuilder,
    validate_discount_code,
};
