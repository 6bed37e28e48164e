//! Pagination configuration via `keyset.toml`
//!
//! Every field is optional; an empty file yields the defaults.
//!
//! ```toml
//! default_limit = 20
//! max_limit = 100
//! cursor_encoding = "standard"
//! max_cursor_len = 1024
//! ```

use std::path::{Path, PathBuf};

use keyset_core::{
    CursorCodec, CursorEncoding, PageLimits, DEFAULT_MAX_CURSOR_LEN, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "keyset.toml";

/// Configuration loading or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parse but are inconsistent
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Pagination settings shared by all listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Page size when a request has none
    pub default_limit: usize,
    /// Largest page size served; larger requests are clamped
    pub max_limit: usize,
    /// Base64 alphabet for cursor tokens
    pub cursor_encoding: CursorEncoding,
    /// Longest cursor token accepted before decoding
    pub max_cursor_len: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
            cursor_encoding: CursorEncoding::Standard,
            max_cursor_len: DEFAULT_MAX_CURSOR_LEN,
        }
    }
}

impl PaginationConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PaginationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the values are usable together
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid("default_limit must be at least 1".to_string()));
        }
        if self.max_limit < self.default_limit {
            return Err(ConfigError::Invalid(format!(
                "max_limit ({}) must not be below default_limit ({})",
                self.max_limit, self.default_limit
            )));
        }
        if self.max_cursor_len == 0 {
            return Err(ConfigError::Invalid("max_cursor_len must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Page size policy
    pub fn limits(&self) -> PageLimits {
        PageLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }

    /// Cursor codec
    pub fn codec(&self) -> CursorCodec {
        CursorCodec::new(self.cursor_encoding, self.max_cursor_len)
    }

    /// Default config file content with comments
    pub fn default_toml() -> &'static str {
        r#"# Keyset pagination configuration
#
# Page size used when a request does not specify one.
default_limit = 20

# Requests for larger pages are clamped to this size.
max_limit = 100

# Cursor token alphabet: "standard" (padded base64) or "url_safe"
# (unpadded, safe in query strings without escaping).
cursor_encoding = "standard"

# Tokens longer than this are ignored without decoding.
max_cursor_len = 1024
"#
    }
}
