// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Verhoeff checksum over decimal digits.
//
// Detects every single-digit substitution and every transposition of two
// adjacent digits. Digit slices are given most-significant first; the
// algorithm itself walks them from the right.

/// Multiplication table of the dihedral group D5.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation, row `i` applies to the digit `i mod 8`
/// places from the right.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse of each element under `D`.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Fold `digits` (most-significant first) into the Verhoeff accumulator,
/// treating the rightmost digit as sitting `offset` places from the end.
fn fold(digits: &[u8], offset: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &digit)| {
            debug_assert!(digit < 10, "not a decimal digit: {digit}");
            D[c as usize][P[(i + offset) % 8][digit as usize] as usize]
        })
}

/// Verhoeff checksum of a digit sequence that already ends in its check
/// digit. `0` means the sequence is consistent.
///
/// # Panics
///
/// Panics if any element of `digits` is greater than 9.
pub fn checksum(digits: &[u8]) -> u8 {
    fold(digits, 0)
}

/// Check digit to append to `payload` so that [`checksum`] of the result is 0.
///
/// # Panics
///
/// Panics if any element of `payload` is greater than 9.
pub fn check_digit(payload: &[u8]) -> u8 {
    INV[fold(payload, 1) as usize]
}

/// Validate any non-empty string of ASCII digits whose last digit is a
/// Verhoeff check digit. No whitespace handling and no length policy.
pub fn validate_digits(input: &str) -> bool {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
    checksum(&digits) == 0
}
