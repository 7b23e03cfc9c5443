//! Keyless two-character checksum used to recognize and verify partner codes.

/// Output alphabet of the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `a-z0-9`, used for the self-check embedded in every partner code.
    Lower,
    /// `A-Z0-9`, used for the hash-derived suffix.
    Upper,
}

impl Alphabet {
    const LOWER: &'static [u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const UPPER: &'static [u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    fn symbols(self) -> &'static [u8; 36] {
        match self {
            Self::Lower => Self::LOWER,
            Self::Upper => Self::UPPER,
        }
    }

    fn symbol(self, index: u8) -> char {
        let symbols = self.symbols();
        char::from(symbols[usize::from(index) % symbols.len()])
    }
}

/// Numeric value of a hex digit, or 0 for anything else.
pub fn hex_char_value(c: char) -> u8 {
    match c {
        '0'..='9' => c as u8 - b'0',
        'a'..='f' => c as u8 - b'a' + 10,
        'A'..='F' => c as u8 - b'A' + 10,
        _ => 0,
    }
}

/// Numeric value of the first character of `s` as a hex digit.
///
/// Returns 0 for empty input or a non-hex first character; 0 is therefore not proof of
/// a literal `'0'`.
pub fn hex_digit_value(s: &str) -> u8 {
    s.chars().next().map_or(0, hex_char_value)
}

/// Mix two characters into two checksum characters drawn from `alphabet`.
///
/// Output is `alphabet[(b1 ^ b2) % 36]` followed by `alphabet[(b1 + b2) % 36]`, where
/// `b1` and `b2` are the hex values of `c1` and `c2`.
pub fn checksum_pair(c1: char, c2: char, alphabet: Alphabet) -> [char; 2] {
    let b1 = hex_char_value(c1);
    let b2 = hex_char_value(c2);
    [alphabet.symbol(b1 ^ b2), alphabet.symbol(b1 + b2)]
}

/// Expected trailing two characters of a partner code given the two before them.
///
/// Anything other than exactly two characters yields an empty string, which never
/// matches a real code.
pub fn self_check(first2: &str) -> String {
    let mut chars = first2.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c1), Some(c2), None) => checksum_pair(c1, c2, Alphabet::Lower).iter().collect(),
        _ => String::new(),
    }
}

/// Four-character verification suffix for a lowercase hex digest.
///
/// The first two digest characters are kept literally and followed by their checksum in
/// the uppercase alphabet. Digests shorter than two characters mix in `'0'`.
pub fn derive_suffix(hex_digest: &str) -> String {
    let mut chars = hex_digest.chars();
    let c1 = chars.next().unwrap_or('0');
    let c2 = chars.next().unwrap_or('0');
    let [k1, k2] = checksum_pair(c1, c2, Alphabet::Upper);
    [c1, c2, k1, k2].iter().collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn hex_digit_value_covers_both_cases() {
        assert_eq!(hex_digit_value("0"), 0);
        assert_eq!(hex_digit_value("9"), 9);
        assert_eq!(hex_digit_value("a"), 10);
        assert_eq!(hex_digit_value("F"), 15);
        assert_eq!(hex_digit_value("f"), 15);
    }

    #[test]
    fn hex_digit_value_defaults_to_zero() {
        assert_eq!(hex_digit_value(""), 0);
        assert_eq!(hex_digit_value("g"), 0);
        assert_eq!(hex_digit_value("é"), 0);
        assert_eq!(hex_digit_value("-1"), 0);
    }

    #[test]
    fn hex_digit_value_only_reads_first_char() {
        assert_eq!(hex_digit_value("b0"), 11);
        assert_eq!(hex_digit_value("zf"), 0);
    }

    #[test]
    fn self_check_matches_known_codes() {
        // 1 ^ 5 = 4 -> 'e', 1 + 5 = 6 -> 'g'
        assert_eq!(self_check("15"), "eg");
        // 10 ^ 11 = 1 -> 'b', 10 + 11 = 21 -> 'v'
        assert_eq!(self_check("ab"), "bv");
        assert_eq!(self_check("00"), "aa");
        // 15 ^ 15 = 0, 15 + 15 = 30 -> '4'
        assert_eq!(self_check("ff"), "a4");
    }

    #[test]
    fn self_check_requires_two_chars() {
        assert_eq!(self_check(""), "");
        assert_eq!(self_check("1"), "");
        assert_eq!(self_check("123"), "");
    }

    #[test]
    fn derive_suffix_keeps_literal_prefix() {
        assert_eq!(derive_suffix("15ab"), "15EG");
        assert_eq!(derive_suffix("7e00"), "7eJV");
        assert_eq!(derive_suffix("12"), "12DD");
    }

    #[test]
    fn derive_suffix_pads_short_digests() {
        assert_eq!(derive_suffix(""), "00AA");
        assert_eq!(derive_suffix("f"), "f0PP");
    }

    #[test]
    fn lowercase_derived_suffix_passes_self_check() {
        let suffix = derive_suffix("7e").to_lowercase();
        assert_eq!(self_check(&suffix[..2]), suffix[2..]);
    }

    proptest! {
        #[test]
        fn checksum_pair_is_total_and_deterministic(b1 in 0u8..16, b2 in 0u8..16) {
            let c1 = char::from_digit(u32::from(b1), 16).unwrap_or('0');
            let c2 = char::from_digit(u32::from(b2), 16).unwrap_or('0');
            let lower = checksum_pair(c1, c2, Alphabet::Lower);
            prop_assert_eq!(lower, checksum_pair(c1, c2, Alphabet::Lower));
            prop_assert!(lower.iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

            let upper = checksum_pair(c1, c2, Alphabet::Upper);
            prop_assert_eq!(
                upper.map(|c| c.to_ascii_lowercase()),
                lower
            );
        }

        #[test]
        fn hex_case_does_not_change_the_checksum(b1 in 0u8..16, b2 in 0u8..16) {
            let c1 = char::from_digit(u32::from(b1), 16).unwrap_or('0');
            let c2 = char::from_digit(u32::from(b2), 16).unwrap_or('0');
            prop_assert_eq!(
                checksum_pair(c1, c2, Alphabet::Lower),
                checksum_pair(c1.to_ascii_uppercase(), c2.to_ascii_uppercase(), Alphabet::Lower)
            );
        }
    }
}
