// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// idscan-validator — Identity-number validation.
//
// Provides the Verhoeff checksum (check, generate) and the Aadhaar number
// rules on top of it: whitespace removal, 12 ASCII digits, no leading 0 or 1.

pub mod aadhaar;
pub mod verhoeff;

pub use aadhaar::{AadhaarNumber, diagnose, is_valid};
pub use verhoeff::{check_digit, checksum, validate_digits};
