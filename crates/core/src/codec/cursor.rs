//! Cursor codec
//!
//! Owns the wire format of continuation cursors and nothing else:
//!
//! ```text
//! cursor = base64( canonical(primary) "|" tiebreak_id )
//! ```
//!
//! Decoding is deliberately lenient at the call site: [`CursorCodec::decode`]
//! returns `None` for anything that is not a well-formed token, which callers
//! treat as "start from the newest row". [`CursorCodec::try_decode`] exposes
//! the reason for diagnostics. Neither is a validation gate; a decoded cursor
//! is only a position, never an authorization.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contract::{Cursor, Primary, SortKey, SortKeyError, KEY_DELIMITER};

/// Default upper bound on accepted token length, in bytes
pub const DEFAULT_MAX_CURSOR_LEN: usize = 1024;

/// Base64 alphabet used for cursor tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorEncoding {
    /// RFC 4648 standard alphabet with padding
    #[default]
    Standard,
    /// RFC 4648 URL-safe alphabet without padding
    UrlSafe,
}

/// Why a token did not decode to a sort key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorDecodeError {
    /// Token is empty or whitespace
    #[error("cursor token is empty")]
    Empty,

    /// Token exceeds the configured length bound
    #[error("cursor token exceeds max length: {len} bytes (max {max})")]
    TooLong {
        /// Token length
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Not valid base64 in the configured alphabet
    #[error("cursor token is not valid base64: {0}")]
    Base64(String),

    /// Decoded bytes are not UTF-8
    #[error("cursor payload is not valid UTF-8")]
    NotUtf8,

    /// Payload does not split into exactly two parts
    #[error("cursor payload has {parts} parts, expected 2")]
    WrongPartCount {
        /// Number of parts found
        parts: usize,
    },

    /// Primary part is empty or does not parse
    #[error("cursor primary {0:?} is not a date or timestamp")]
    InvalidPrimary(String),

    /// Tiebreak part is not a valid id
    #[error("cursor tiebreak is invalid: {0}")]
    InvalidTiebreak(#[from] SortKeyError),
}

/// Converts sort keys to and from opaque cursor tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCodec {
    encoding: CursorEncoding,
    max_token_len: usize,
}

impl Default for CursorCodec {
    fn default() -> Self {
        CursorCodec::new(CursorEncoding::Standard, DEFAULT_MAX_CURSOR_LEN)
    }
}

impl CursorCodec {
    /// Create a codec with the given alphabet and token length bound
    pub const fn new(encoding: CursorEncoding, max_token_len: usize) -> Self {
        CursorCodec {
            encoding,
            max_token_len,
        }
    }

    /// Alphabet in use
    pub fn encoding(&self) -> CursorEncoding {
        self.encoding
    }

    /// Encode a sort key into a cursor
    ///
    /// Pure and deterministic: equal keys give equal cursors and distinct
    /// keys give distinct cursors.
    pub fn encode(&self, key: &SortKey) -> Cursor {
        let payload = format!(
            "{}{}{}",
            key.primary().canonical(),
            KEY_DELIMITER,
            key.tiebreak_id()
        );
        let token = match self.encoding {
            CursorEncoding::Standard => STANDARD.encode(payload),
            CursorEncoding::UrlSafe => URL_SAFE_NO_PAD.encode(payload),
        };
        Cursor::from_token(token)
    }

    /// Decode a token, discarding the failure reason
    ///
    /// `None` means "no usable cursor": the caller starts from the first page.
    pub fn decode(&self, token: &str) -> Option<SortKey> {
        self.try_decode(token).ok()
    }

    /// Decode a token, reporting why it was rejected
    ///
    /// Surrounding whitespace is ignored.
    pub fn try_decode(&self, token: &str) -> Result<SortKey, CursorDecodeError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CursorDecodeError::Empty);
        }
        if token.len() > self.max_token_len {
            return Err(CursorDecodeError::TooLong {
                len: token.len(),
                max: self.max_token_len,
            });
        }

        let bytes = match self.encoding {
            CursorEncoding::Standard => STANDARD.decode(token),
            CursorEncoding::UrlSafe => URL_SAFE_NO_PAD.decode(token),
        }
        .map_err(|e| CursorDecodeError::Base64(e.to_string()))?;
        let payload = String::from_utf8(bytes).map_err(|_| CursorDecodeError::NotUtf8)?;

        let parts: Vec<&str> = payload.split(KEY_DELIMITER).collect();
        let [primary, tiebreak] = parts.as_slice() else {
            return Err(CursorDecodeError::WrongPartCount { parts: parts.len() });
        };

        let parsed = Primary::parse_canonical(primary)
            .ok_or_else(|| CursorDecodeError::InvalidPrimary((*primary).to_string()))?;
        SortKey::new(parsed, *tiebreak).map_err(|e| match e {
            SortKeyError::PrimaryOutOfRange { .. } => {
                CursorDecodeError::InvalidPrimary((*primary).to_string())
            }
            other => CursorDecodeError::InvalidTiebreak(other),
        })
    }
}
