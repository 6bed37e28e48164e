//! Page size limits
//!
//! Callers may omit the page size, ask for a non-positive one, or ask for an
//! enormous one. The policy is:
//!
//! | Requested | Resolved |
//! |-----------|----------|
//! | absent | `default_limit` |
//! | `<= 0` | `LimitError::NonPositive` |
//! | `> max_limit` | `max_limit` |
//! | otherwise | as requested |

use thiserror::Error;
use tracing::debug;

/// Page size used when the caller gives none
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Largest page a caller can get
pub const MAX_PAGE_LIMIT: usize = 100;

/// Invalid page size
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Zero or negative page size
    #[error("page limit must be positive, got {requested}")]
    NonPositive {
        /// Value the caller sent
        requested: i64,
    },
}

/// Page size policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Size used when the request has none
    pub default_limit: usize,
    /// Upper clamp
    pub max_limit: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        PageLimits {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
        }
    }
}

impl PageLimits {
    /// Resolve a requested page size to the size actually used
    ///
    /// # Errors
    ///
    /// Returns `LimitError::NonPositive` for zero or negative requests.
    pub fn resolve(&self, requested: Option<i64>) -> Result<usize, LimitError> {
        let Some(requested) = requested else {
            return Ok(self.default_limit);
        };
        if requested <= 0 {
            return Err(LimitError::NonPositive { requested });
        }
        match usize::try_from(requested) {
            Ok(n) if n <= self.max_limit => Ok(n),
            _ => {
                debug!(target: "keyset::page", requested, max = self.max_limit, "Clamping page limit");
                Ok(self.max_limit)
            }
        }
    }
}
