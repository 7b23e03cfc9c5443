use std::borrow::Cow;

use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Submitted discount / gift-card code in normalized form.
///
/// Invariant: lowercase and trimmed. Normalization never fails; an empty code is a
/// valid (if uninteresting) value.
pub struct DiscountCode(String);

impl DiscountCode {
    /// Minimum number of characters a partner code can have (the checksum block).
    pub const MIN_LEN: usize = 4;

    /// Lowercase and trim a raw code.
    pub fn normalize(value: &str) -> Self {
        Self(value.to_lowercase().trim().to_owned())
    }

    /// Borrow the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// `true` when the code is empty or shorter than [`DiscountCode::MIN_LEN`].
    pub fn is_too_short(&self) -> bool {
        self.char_len() < Self::MIN_LEN
    }

    pub fn has_prefix(&self, prefix: &CodePrefix) -> bool {
        self.0.starts_with(prefix.as_str())
    }

    /// The trailing checksum block, or `None` if the code has fewer than four characters.
    pub fn last4(&self) -> Option<&str> {
        self.0
            .char_indices()
            .rev()
            .nth(Self::MIN_LEN - 1)
            .map(|(idx, _)| &self.0[idx..])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Prefix that marks a code as partner-issued (for example `flx`).
///
/// Invariant: non-empty, trimmed and lowercase.
pub struct CodePrefix(String);

impl CodePrefix {
    pub const FIELD: &'static str = "prefix";

    /// Create a validated [`CodePrefix`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Built-in prefix; caller guarantees the invariant.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// International dialing prefix added to phone numbers that lack one.
///
/// Invariant: `+` followed by one to three ASCII digits.
pub struct CountryCode(String);

impl CountryCode {
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let valid = trimmed
            .strip_prefix('+')
            .is_some_and(|digits| {
                (1..=3).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
            });
        if !valid {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Built-in country code; caller guarantees the invariant.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Lowercase hostname extracted from a free-form domain or URL.
///
/// Invariant: non-empty and lowercase.
pub struct SanitizedDomain(String);

impl SanitizedDomain {
    const DEFAULT_SCHEME: &'static str = "https://";

    /// Reduce `input` to its hostname.
    ///
    /// Inputs without a scheme are parsed as `https://` URLs. Characters the URL parser
    /// refuses in a host (embedded NUL, spaces, ...) are rejected by the parser itself.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let candidate = if trimmed.contains("://") {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(format!("{}{trimmed}", Self::DEFAULT_SCHEME))
        };

        let url = Url::parse(&candidate).map_err(|err| ValidationError::InvalidDomain {
            input: trimmed.to_owned(),
            message: err.to_string(),
        })?;

        let host = url.host_str().unwrap_or_default().to_lowercase();
        if host.is_empty() {
            return Err(ValidationError::EmptyDomain);
        }
        Ok(Self(host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
