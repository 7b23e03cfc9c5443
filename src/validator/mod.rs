//! Validator layer: classifies a submitted code and verifies it against the requesting
//! domain and phone number.

use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::checksum::{derive_suffix, self_check};
use crate::domain::{
    CodePrefix, CountryCode, DiscountCode, Reason, SanitizedDomain, ValidationError,
    ValidationResult,
};
use crate::hash::{DEFAULT_COUNTRY_CODE, phone_number_hash, sha256_hex};

/// Prefixes recognized by [`DiscountCodeValidator::default`].
pub const DEFAULT_PREFIXES: [&str; 2] = ["flx", "unq"];

static DEFAULT_VALIDATOR: LazyLock<DiscountCodeValidator> =
    LazyLock::new(DiscountCodeValidator::default);

/// Validate a code with the default prefixes and country code.
///
/// ```rust
/// let result = flxcode::validate_discount_code("example.com", "+918989898989", "FLX123415EG", 100.0);
/// assert!(result.is_applicable);
/// assert!(result.is_fealtyx_discount_code);
/// assert_eq!(result.reason, None);
/// ```
pub fn validate_discount_code(
    domain: &str,
    phone_number: &str,
    code: &str,
    order_amount: f64,
) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(domain, phone_number, code, order_amount)
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DiscountCodeValidatorBuilder::build`].
pub enum ConfigError {
    /// At least one partner prefix is required.
    #[error("no partner code prefixes configured")]
    NoPrefixes,

    /// A prefix or the country code was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`DiscountCodeValidator`].
///
/// Use this when partner codes carry prefixes other than the defaults, or when phone
/// numbers should be canonicalized with a different country code.
pub struct DiscountCodeValidatorBuilder {
    prefixes: Vec<String>,
    country_code: String,
}

impl DiscountCodeValidatorBuilder {
    /// Create a builder with the default prefixes and country code.
    pub fn new() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|&p| p.to_owned()).collect(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
        }
    }

    /// Replace the recognized prefixes.
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Recognize one more prefix in addition to those already configured.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Override the country code added to phone numbers that lack it.
    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Build a [`DiscountCodeValidator`].
    pub fn build(self) -> Result<DiscountCodeValidator, ConfigError> {
        if self.prefixes.is_empty() {
            return Err(ConfigError::NoPrefixes);
        }
        let prefixes = self
            .prefixes
            .into_iter()
            .map(CodePrefix::new)
            .collect::<Result<Vec<_>, _>>()?;
        let country_code = CountryCode::new(self.country_code)?;

        Ok(DiscountCodeValidator {
            prefixes,
            country_code,
        })
    }
}

impl Default for DiscountCodeValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
/// Classifies and verifies partner discount codes.
///
/// Immutable after construction; share one instance across threads.
pub struct DiscountCodeValidator {
    prefixes: Vec<CodePrefix>,
    country_code: CountryCode,
}

impl Default for DiscountCodeValidator {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES
                .into_iter()
                .map(CodePrefix::from_static)
                .collect(),
            country_code: CountryCode::from_static(DEFAULT_COUNTRY_CODE),
        }
    }
}

impl DiscountCodeValidator {
    /// Validator with the default prefixes (`flx`, `unq`) and country code (`+91`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a customized validator.
    pub fn builder() -> DiscountCodeValidatorBuilder {
        DiscountCodeValidatorBuilder::new()
    }

    pub fn prefixes(&self) -> &[CodePrefix] {
        &self.prefixes
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    /// Structural test only: known prefix and a consistent self-checksum. No hashing.
    pub fn is_partner_format(&self, code: &DiscountCode) -> bool {
        if code.is_too_short() || !self.has_known_prefix(code) {
            return false;
        }
        code.last4().is_some_and(checksum_block_is_consistent)
    }

    /// The four-character suffix a code issued for `domain` and `phone_number` must end in.
    ///
    /// The checksum half is uppercase; comparisons against codes are case-insensitive.
    pub fn expected_suffix(
        &self,
        domain: &str,
        phone_number: &str,
    ) -> Result<String, ValidationError> {
        let domain = SanitizedDomain::parse(domain)?;
        Ok(self.suffix_for(&domain, phone_number))
    }

    /// Classify `code` and, if it is partner-format, verify it for `domain` and
    /// `phone_number`.
    ///
    /// `order_amount` is accepted for forward compatibility and does not affect the
    /// outcome.
    pub fn validate(
        &self,
        domain: &str,
        phone_number: &str,
        code: &str,
        order_amount: f64,
    ) -> ValidationResult {
        let code = DiscountCode::normalize(code);
        trace!(code_len = code.char_len(), order_amount, "validating discount code");

        if code.is_too_short() {
            trace!("code too short for a partner code");
            return ValidationResult::not_partner_code();
        }
        if !self.has_known_prefix(&code) {
            trace!("code has no partner prefix");
            return ValidationResult::not_partner_code();
        }
        let Some(last4) = code.last4() else {
            return ValidationResult::not_partner_code();
        };
        if !checksum_block_is_consistent(last4) {
            trace!("code fails the partner self-check");
            return ValidationResult::not_partner_code();
        }

        let domain = match SanitizedDomain::parse(domain) {
            Ok(domain) => domain,
            Err(err) => {
                debug!(error = %err, reason = %Reason::InvalidDomain, "rejecting partner code");
                return ValidationResult::rejected(Reason::InvalidDomain);
            }
        };

        let expected = self.suffix_for(&domain, phone_number).to_lowercase();
        if expected != last4 {
            debug!(
                domain = domain.as_str(),
                reason = %Reason::VoucherNotEligible,
                "rejecting partner code"
            );
            return ValidationResult::rejected(Reason::VoucherNotEligible);
        }

        debug!(domain = domain.as_str(), "partner code verified");
        ValidationResult::verified()
    }

    fn has_known_prefix(&self, code: &DiscountCode) -> bool {
        self.prefixes.iter().any(|prefix| code.has_prefix(prefix))
    }

    fn suffix_for(&self, domain: &SanitizedDomain, phone_number: &str) -> String {
        let phone_hash = phone_number_hash(phone_number, &self.country_code);
        let input = format!("{}{phone_hash}", domain.as_str()).to_lowercase();
        derive_suffix(&sha256_hex(&input))
    }
}

/// `last4` is lowercase; its last two characters must be the self-check of its first two.
fn checksum_block_is_consistent(last4: &str) -> bool {
    let split = last4.char_indices().nth(2).map_or(last4.len(), |(idx, _)| idx);
    let (first2, actual_last2) = last4.split_at(split);
    self_check(first2) == actual_last2
}
