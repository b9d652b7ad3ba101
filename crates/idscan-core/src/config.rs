// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IdScanError, Result};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Show only the last four digits of a number in reports.
    pub mask_output: bool,
    /// Print the reason next to every rejected number.
    pub explain_rejections: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mask_output: true,
            explain_rejections: false,
            log_filter: "warn".into(),
        }
    }
}

impl AppConfig {
    /// Read settings from a JSON file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.log_filter.trim().is_empty() {
            return Err(IdScanError::Config(format!(
                "{}: log_filter must not be empty",
                path.display()
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().expect("create temp file");
        std::fs::write(file.path(), contents).expect("write config");
        file
    }

    #[test]
    fn defaults_mask_output() {
        let cfg = AppConfig::default();
        assert!(cfg.mask_output);
        assert!(!cfg.explain_rejections);
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(r#"{ "explain_rejections": true }"#);
        let cfg = AppConfig::load(file.path()).expect("load");
        assert!(cfg.explain_rejections);
        assert!(cfg.mask_output);
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let file = write_config("{ mask_output: ");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, IdScanError::Serialization(_)));
    }

    #[test]
    fn empty_log_filter_rejected() {
        let file = write_config(r#"{ "log_filter": "  " }"#);
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, IdScanError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = AppConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IdScanError::Io(_)));
    }
}
