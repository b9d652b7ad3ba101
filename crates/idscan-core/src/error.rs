// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for idscan.

use thiserror::Error;

use crate::types::Rejection;

/// Top-level error type for all idscan operations.
#[derive(Debug, Error)]
pub enum IdScanError {
    // -- Identifier errors --
    #[error("invalid identity number: {0}")]
    InvalidIdentifier(Rejection),

    #[error("invalid payload for check-digit generation: {0}")]
    InvalidPayload(Rejection),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IdScanError {
    /// The rejection behind an identifier or payload error, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::InvalidIdentifier(r) | Self::InvalidPayload(r) => Some(*r),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, IdScanError>;
