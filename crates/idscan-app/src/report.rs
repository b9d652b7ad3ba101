// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-number outcome and its text / JSON rendering.

use idscan_core::human_errors::humanize_rejection;
use idscan_core::types::Rejection;
use idscan_validator::AadhaarNumber;
use serde::Serialize;

/// How a report line should look.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub reveal: bool,
    pub explain: bool,
    pub json: bool,
}

/// Result of checking one candidate.
pub struct Outcome {
    shown: String,
    result: Result<AadhaarNumber, Rejection>,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    input: &'a str,
    valid: bool,
    reason: Option<&'static str>,
}

impl Outcome {
    pub fn check(input: &str, reveal: bool) -> Self {
        let result = AadhaarNumber::inspect(input);
        let shown = match (&result, reveal) {
            (Ok(number), true) => number.to_string(),
            (Ok(number), false) => number.masked(),
            (Err(_), true) => input.trim().to_owned(),
            (Err(_), false) => mask_raw(input),
        };
        Self { shown, result }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn render(&self, style: ReportStyle) -> Result<String, serde_json::Error> {
        if style.json {
            return serde_json::to_string(&JsonLine {
                input: &self.shown,
                valid: self.is_valid(),
                reason: self.result.as_ref().err().map(Rejection::keyword),
            });
        }

        Ok(match &self.result {
            Ok(_) => format!("valid    {}", self.shown),
            Err(rejection) if style.explain => {
                let human = humanize_rejection(rejection);
                format!(
                    "invalid  {}: {} {}",
                    self.shown, human.message, human.suggestion
                )
            }
            Err(_) => format!("invalid  {}", self.shown),
        })
    }
}

/// Mask an arbitrary (possibly malformed) input: whitespace dropped, every
/// character but the last four replaced with `X`.
fn mask_raw(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let keep = chars.len().saturating_sub(4);
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if i < keep { 'X' } else { c })
        .collect()
}
