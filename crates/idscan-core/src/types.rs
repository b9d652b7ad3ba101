// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for identity-number checking.

use serde::{Deserialize, Serialize};

/// Number of digits in an Aadhaar identity number, check digit included.
pub const AADHAAR_LEN: usize = 12;

/// Why a candidate identity number was turned away.
///
/// Checks run in this order: length, digits, leading digit, checksum.
/// The first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Wrong number of characters after whitespace was removed.
    WrongLength { expected: usize, found: usize },
    /// A character that is not an ASCII digit `0`-`9`.
    /// `position` is zero-based, counted after whitespace removal.
    NonDigit { position: usize, character: char },
    /// Numbers starting with 0 or 1 are never issued.
    ForbiddenLeadingDigit { digit: char },
    /// All digits present, but the Verhoeff check digit does not match.
    ChecksumMismatch,
}

impl Rejection {
    /// Short machine-friendly keyword (used in JSON output).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => "wrong-length",
            Self::NonDigit { .. } => "non-digit",
            Self::ForbiddenLeadingDigit { .. } => "forbidden-leading-digit",
            Self::ChecksumMismatch => "checksum-mismatch",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "expected {expected} digits, found {found} characters")
            }
            Self::NonDigit {
                position,
                character,
            } => write!(
                f,
                "character {character:?} at position {position} is not a digit"
            ),
            Self::ForbiddenLeadingDigit { digit } => {
                write!(f, "numbers cannot start with {digit}")
            }
            Self::ChecksumMismatch => write!(f, "check digit does not match"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_found_length() {
        let r = Rejection::WrongLength {
            expected: AADHAAR_LEN,
            found: 5,
        };
        assert_eq!(r.to_string(), "expected 12 digits, found 5 characters");
    }

    #[test]
    fn keywords_are_distinct() {
        let all = [
            Rejection::WrongLength {
                expected: 12,
                found: 0,
            },
            Rejection::NonDigit {
                position: 0,
                character: 'x',
            },
            Rejection::ForbiddenLeadingDigit { digit: '0' },
            Rejection::ChecksumMismatch,
        ];
        let mut keywords: Vec<_> = all.iter().map(Rejection::keyword).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), all.len());
    }
}
