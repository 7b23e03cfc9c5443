use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidDomain { input: String, message: String },
    EmptyDomain,
    InvalidCountryCode { input: String },
    UnknownReason { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidDomain { message, .. } => write!(f, "invalid domain: {message}"),
            Self::EmptyDomain => f.write_str("empty domain"),
            Self::InvalidCountryCode { input } => {
                write!(f, "invalid country code: {input:?} (expected '+' and 1-3 digits)")
            }
            Self::UnknownReason { input } => write!(f, "unknown reason: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "prefix" };
        assert_eq!(err.to_string(), "prefix must not be empty");

        let err = ValidationError::InvalidDomain {
            input: "https://exa mple.com".to_owned(),
            message: "invalid domain character".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid domain: invalid domain character");

        assert_eq!(ValidationError::EmptyDomain.to_string(), "empty domain");

        let err = ValidationError::InvalidCountryCode {
            input: "91".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid country code: \"91\" (expected '+' and 1-3 digits)"
        );

        let err = ValidationError::UnknownReason {
            input: "Nope".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown reason: Nope");
    }
}
