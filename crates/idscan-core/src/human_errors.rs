// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people typing a number off a card.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::IdScanError;
use crate::types::Rejection;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must fix what they typed or how they called us.
    ActionRequired,
    /// Retrying the same thing won't help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert an `IdScanError` into a `HumanError`.
pub fn humanize_error(err: &IdScanError) -> HumanError {
    match err {
        IdScanError::InvalidIdentifier(rejection) => humanize_rejection(rejection),

        IdScanError::InvalidPayload(rejection) => HumanError {
            message: "That can't be turned into an Aadhaar number.".into(),
            suggestion: format!(
                "Enter the first 11 digits of the number, starting with 2-9. ({rejection})"
            ),
            severity: Severity::ActionRequired,
        },

        IdScanError::Config(detail) => HumanError {
            message: "The settings file has a problem.".into(),
            suggestion: format!("Fix the settings file or remove it to use defaults. ({detail})"),
            severity: Severity::ActionRequired,
        },

        IdScanError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The settings file couldn't be found.".into(),
                    suggestion: "Check the path you gave, or leave it out to use defaults.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading a file.".into(),
                    suggestion: format!("Check the file permissions and try again. ({io_err})"),
                    severity: Severity::Permanent,
                }
            }
        }

        IdScanError::Serialization(_) => HumanError {
            message: "The settings file isn't valid JSON.".into(),
            suggestion: "Open the file and check for missing quotes, commas or braces.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

/// Explain a single rejected number.
pub fn humanize_rejection(rejection: &Rejection) -> HumanError {
    match rejection {
        Rejection::WrongLength { expected, found } => HumanError {
            message: format!("An Aadhaar number has {expected} digits."),
            suggestion: if found < expected {
                format!("Only {found} were entered. Check for missing digits.")
            } else {
                format!("{found} were entered. Check for extra digits.")
            },
            severity: Severity::ActionRequired,
        },

        Rejection::NonDigit { character, .. } => HumanError {
            message: "An Aadhaar number contains only digits.".into(),
            suggestion: format!("Remove the {character:?} and any other letters or symbols."),
            severity: Severity::ActionRequired,
        },

        Rejection::ForbiddenLeadingDigit { digit } => HumanError {
            message: format!("An Aadhaar number never starts with {digit}."),
            suggestion: "Check the first digit against the card.".into(),
            severity: Severity::ActionRequired,
        },

        Rejection::ChecksumMismatch => HumanError {
            message: "This isn't a valid Aadhaar number.".into(),
            suggestion: "A digit may have been mistyped or two digits swapped. Compare it with the card again.".into(),
            severity: Severity::ActionRequired,
        },
    }
}
