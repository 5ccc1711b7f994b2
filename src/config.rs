//! Configuration of the field set.
//!
//! ```rust
//! use chromalink::FieldsConfig;
//!
//! let config = FieldsConfig::from_json_str(r#"{ "lab_precision": 2 }"#)?;
//! assert_eq!(config.lab_precision, 2);
//! assert_eq!(config.cmyk_precision, 4);
//! # Ok::<(), chromalink::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the field set formats derived values and handles rejected input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Decimal places written into Lab fields.
    pub lab_precision: usize,

    /// Decimal places written into CMYK fields. Derived CMYK values never
    /// carry more than four.
    pub cmyk_precision: usize,

    /// Clear a field when its text is rejected.
    pub clear_on_reject: bool,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            lab_precision: 4,
            cmyk_precision: 4,
            clear_on_reject: true,
        }
    }
}

impl FieldsConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize this configuration as pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
