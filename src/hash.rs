//! SHA-256 helpers with pre-hashed passthrough, and phone number canonicalization.
//!
//! Both [`sha256_hex`] and [`phone_number_hash`] treat a 64-character hex string as
//! already hashed and return it unchanged, so callers may supply either a raw value or
//! its digest.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::domain::CountryCode;

/// Country code added to phone numbers that do not already start with it.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

static SHA256_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-fA-F0-9]{64}$").expect("static pattern compiles"));

/// `true` if `s` looks like a hex-encoded SHA-256 digest (either case).
pub fn is_sha256_hash(s: &str) -> bool {
    SHA256_HEX.is_match(s)
}

/// Lowercase hex SHA-256 of `s`.
///
/// Empty input and input that is already a digest are returned unchanged.
pub fn sha256_hex(s: &str) -> String {
    if s.is_empty() || is_sha256_hash(s) {
        return s.to_owned();
    }
    hex::encode(Sha256::digest(s.as_bytes()))
}

/// Canonical hash of a phone number.
///
/// Empty and pre-hashed input pass through. Otherwise `country_code` is prepended when
/// missing and the result is hashed.
pub fn phone_number_hash(phone: &str, country_code: &CountryCode) -> String {
    if phone.is_empty() || is_sha256_hash(phone) {
        return phone.to_owned();
    }
    if phone.starts_with(country_code.as_str()) {
        return sha256_hex(phone);
    }
    sha256_hex(&format!("{}{phone}", country_code.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE_HASH: &str = "9424a65c74b9264b45fa8e70f801dfd450c110e18afbe8f8cd288f475a6d2c4f";

    fn india() -> CountryCode {
        CountryCode::new(DEFAULT_COUNTRY_CODE).unwrap()
    }

    #[test]
    fn sha256_hex_is_lowercase_hex() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(sha256_hex("+918989898989"), PHONE_HASH);
    }

    #[test]
    fn sha256_hex_passes_through_digests_and_empty() {
        assert_eq!(sha256_hex(""), "");
        assert_eq!(sha256_hex(PHONE_HASH), PHONE_HASH);

        let upper = PHONE_HASH.to_uppercase();
        assert_eq!(sha256_hex(&upper), upper);
    }

    #[test]
    fn sha256_hex_is_idempotent() {
        let once = sha256_hex("hello");
        assert_eq!(sha256_hex(&once), once);
    }

    #[test]
    fn is_sha256_hash_requires_exactly_64_hex_chars() {
        assert!(is_sha256_hash(PHONE_HASH));
        assert!(is_sha256_hash(&"A".repeat(64)));
        assert!(!is_sha256_hash(&"a".repeat(63)));
        assert!(!is_sha256_hash(&"a".repeat(65)));
        assert!(!is_sha256_hash(&format!("{}g", "a".repeat(63))));
        assert!(!is_sha256_hash(&format!(" {}", "a".repeat(64))));
        assert!(!is_sha256_hash(""));
    }

    #[test]
    fn phone_hash_adds_missing_country_code() {
        assert_eq!(phone_number_hash("+918989898989", &india()), PHONE_HASH);
        assert_eq!(phone_number_hash("8989898989", &india()), PHONE_HASH);
    }

    #[test]
    fn phone_hash_passes_through_digests_and_empty() {
        assert_eq!(phone_number_hash("", &india()), "");
        assert_eq!(phone_number_hash(PHONE_HASH, &india()), PHONE_HASH);
    }

    #[test]
    fn phone_hash_honours_other_country_codes() {
        let us = CountryCode::new("+1").unwrap();
        assert_eq!(phone_number_hash("4155551212", &us), sha256_hex("+14155551212"));
        assert_ne!(
            phone_number_hash("4155551212", &us),
            phone_number_hash("4155551212", &india())
        );
    }
}
