// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Aadhaar number rules on top of the Verhoeff checksum.
//
// A candidate is valid when, after every whitespace character is removed,
// it is exactly 12 ASCII digits, does not start with 0 or 1, and its
// Verhoeff checksum is 0.

use std::str::FromStr;

use idscan_core::error::{IdScanError, Result};
use idscan_core::types::{AADHAAR_LEN, Rejection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::verhoeff;

/// Length of the payload that precedes the check digit.
const PAYLOAD_LEN: usize = AADHAAR_LEN - 1;

/// Returns `true` when `input` is a well-formed Aadhaar number.
///
/// Total over all strings: wrong length, stray characters, a leading 0 or 1
/// and a bad check digit all come back as `false`. Whitespace anywhere in
/// the input (Unicode, not only ASCII spaces) is ignored.
pub fn is_valid(input: &str) -> bool {
    diagnose(input).is_none()
}

/// The first check `input` fails, or `None` if it is valid.
///
/// Checks run in the order length, digits, leading digit, checksum.
pub fn diagnose(input: &str) -> Option<Rejection> {
    check(&normalize(input)).err()
}

fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Length, digit and leading-digit rules. Returns the digit values.
fn gate(candidate: &str, expected: usize) -> std::result::Result<Vec<u8>, Rejection> {
    let found = candidate.chars().count();
    if found != expected {
        return Err(Rejection::WrongLength { expected, found });
    }

    if let Some((position, character)) = candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(Rejection::NonDigit {
            position,
            character,
        });
    }

    // All ASCII from here on, so bytes and chars line up.
    if let Some(&b @ (b'0' | b'1')) = candidate.as_bytes().first() {
        return Err(Rejection::ForbiddenLeadingDigit {
            digit: char::from(b),
        });
    }

    Ok(candidate.bytes().map(|b| b - b'0').collect())
}

fn check(normalized: &str) -> std::result::Result<(), Rejection> {
    let digits = gate(normalized, AADHAAR_LEN)?;
    if verhoeff::checksum(&digits) == 0 {
        Ok(())
    } else {
        Err(Rejection::ChecksumMismatch)
    }
}

/// A 12-digit Aadhaar number that passed every check.
///
/// Only constructible through [`AadhaarNumber::parse`] (or `FromStr`,
/// `TryFrom<String>`, serde), [`AadhaarNumber::inspect`] and
/// [`AadhaarNumber::from_payload`], so holding
/// one proves validity. Serializes as the bare 12-digit string.
///
/// `Debug` output is masked so numbers don't leak into logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AadhaarNumber(String);

impl AadhaarNumber {
    /// Parse and validate, with the same rules as [`is_valid`].
    pub fn parse(input: &str) -> Result<Self> {
        Self::inspect(input).map_err(|rejection| {
            debug!(reason = rejection.keyword(), "identity number rejected");
            IdScanError::InvalidIdentifier(rejection)
        })
    }

    /// Like [`AadhaarNumber::parse`], but hands back the bare [`Rejection`]
    /// and logs nothing.
    pub fn inspect(input: &str) -> std::result::Result<Self, Rejection> {
        let normalized = normalize(input);
        check(&normalized).map(|()| Self(normalized))
    }

    /// Build a valid number from its first 11 digits by appending the
    /// Verhoeff check digit. Whitespace in `payload` is ignored.
    pub fn from_payload(payload: &str) -> Result<Self> {
        let normalized = normalize(payload);
        let digits = gate(&normalized, PAYLOAD_LEN).map_err(|rejection| {
            debug!(reason = rejection.keyword(), "payload rejected");
            IdScanError::InvalidPayload(rejection)
        })?;
        let check = verhoeff::check_digit(&digits);

        let mut number = normalized;
        number.push(char::from(b'0' + check));
        Ok(Self(number))
    }

    /// The 12 digits without any grouping.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check digit (last digit).
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[AADHAAR_LEN - 1] - b'0'
    }

    /// Only the last four digits visible: `XXXX XXXX 2346`.
    pub fn masked(&self) -> String {
        format!("XXXX XXXX {}", &self.0[8..])
    }
}

impl std::fmt::Display for AadhaarNumber {
    /// Grouped by four as printed on the card: `2341 2341 2346`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", &self.0[..4], &self.0[4..8], &self.0[8..])
    }
}

impl std::fmt::Debug for AadhaarNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AadhaarNumber")
            .field(&self.masked())
            .finish()
    }
}

impl FromStr for AadhaarNumber {
    type Err = IdScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AadhaarNumber {
    type Error = IdScanError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AadhaarNumber> for String {
    fn from(number: AadhaarNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "234123412346";

    #[test]
    fn known_vector_is_valid() {
        assert!(is_valid(VALID));
        assert!(is_valid("499118665246"));
        assert!(is_valid("999999999999"));
    }

    #[test]
    fn wrong_check_digit_is_invalid() {
        assert!(!is_valid("234123412345"));
        assert_eq!(diagnose("234123412345"), Some(Rejection::ChecksumMismatch));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert!(is_valid("2341 2341 2346"));
        assert!(is_valid(" 2341\t2341\n2346 "));
        // NO-BREAK SPACE and IDEOGRAPHIC SPACE are whitespace too.
        assert!(is_valid("2341\u{00A0}2341\u{3000}2346"));
    }

    #[test]
    fn empty_and_blank_are_wrong_length() {
        assert_eq!(
            diagnose(""),
            Some(Rejection::WrongLength {
                expected: 12,
                found: 0
            })
        );
        assert!(!is_valid("   "));
    }

    #[test]
    fn length_checked_before_digits() {
        assert_eq!(
            diagnose("abc"),
            Some(Rejection::WrongLength {
                expected: 12,
                found: 3
            })
        );
        assert!(!is_valid("2341234123460"));
    }

    #[test]
    fn non_digit_reports_position() {
        assert_eq!(
            diagnose("2341-2341234"),
            Some(Rejection::NonDigit {
                position: 4,
                character: '-'
            })
        );
        assert!(!is_valid("+23412341234"));
        assert!(!is_valid("2341234123.6"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // ARABIC-INDIC DIGIT TWO in front of eleven ASCII digits.
        let s = "\u{0662}34123412346";
        assert_eq!(s.chars().count(), 12);
        assert!(matches!(
            diagnose(s),
            Some(Rejection::NonDigit { position: 0, .. })
        ));
    }

    #[test]
    fn leading_zero_or_one_rejected() {
        // Both carry a correct Verhoeff check digit; only the leading digit is wrong.
        assert_eq!(
            crate::verhoeff::checksum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 0]),
            0
        );
        assert_eq!(
            diagnose("123456789010"),
            Some(Rejection::ForbiddenLeadingDigit { digit: '1' })
        );
        assert_eq!(
            diagnose("012345678906"),
            Some(Rejection::ForbiddenLeadingDigit { digit: '0' })
        );
    }

    #[test]
    fn parse_agrees_with_is_valid() {
        for s in [VALID, "234123412345", "", "12345678901x", "2341 2341 2346"] {
            assert_eq!(AadhaarNumber::parse(s).is_ok(), is_valid(s), "input {s:?}");
        }
    }

    #[test]
    fn inspect_returns_bare_rejection() {
        assert_eq!(
            AadhaarNumber::inspect("2341-2341234"),
            Err(Rejection::NonDigit {
                position: 4,
                character: '-'
            })
        );
        assert_eq!(
            AadhaarNumber::inspect("2341 2341 2346").map(|n| n.masked()),
            Ok("XXXX XXXX 2346".to_owned())
        );
    }

    #[test]
    fn parse_error_carries_rejection() {
        let err = AadhaarNumber::parse("234123412345").unwrap_err();
        assert!(matches!(
            err,
            IdScanError::InvalidIdentifier(Rejection::ChecksumMismatch)
        ));
    }

    #[test]
    fn from_str_strips_whitespace() {
        let n: AadhaarNumber = "2341 2341 2346".parse().expect("valid");
        assert_eq!(n.as_str(), VALID);
        assert_eq!(n.check_digit(), 6);
    }

    #[test]
    fn display_groups_by_four() {
        let n = AadhaarNumber::parse(VALID).expect("valid");
        assert_eq!(n.to_string(), "2341 2341 2346");
    }

    #[test]
    fn masked_shows_last_four_only() {
        let n = AadhaarNumber::parse(VALID).expect("valid");
        assert_eq!(n.masked(), "XXXX XXXX 2346");
        assert_eq!(format!("{n:?}"), "AadhaarNumber(\"XXXX XXXX 2346\")");
    }

    #[test]
    fn from_payload_appends_check_digit() {
        let n = AadhaarNumber::from_payload("2341 2341 234").expect("payload");
        assert_eq!(n.as_str(), VALID);
        assert_eq!(
            AadhaarNumber::from_payload("75012345678")
                .expect("payload")
                .as_str(),
            "750123456784"
        );
    }

    #[test]
    fn from_payload_enforces_gate() {
        let err = AadhaarNumber::from_payload("2341234123").unwrap_err();
        assert!(matches!(
            err,
            IdScanError::InvalidPayload(Rejection::WrongLength {
                expected: 11,
                found: 10
            })
        ));
        let err = AadhaarNumber::from_payload("12341234123").unwrap_err();
        assert!(matches!(
            err,
            IdScanError::InvalidPayload(Rejection::ForbiddenLeadingDigit { digit: '1' })
        ));
    }

    #[test]
    fn serde_uses_plain_string() {
        let n = AadhaarNumber::parse(VALID).expect("valid");
        let json = serde_json::to_string(&n).expect("serialize");
        assert_eq!(json, "\"234123412346\"");
        let back: AadhaarNumber = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, n);
    }

    #[test]
    fn serde_rejects_invalid_number() {
        let result = serde_json::from_str::<AadhaarNumber>("\"234123412345\"");
        assert!(result.is_err());
    }

    #[test]
    fn repeated_calls_agree() {
        let first = is_valid(VALID);
        for _ in 0..100 {
            assert_eq!(is_valid(VALID), first);
        }
    }
}
