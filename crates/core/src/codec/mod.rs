//! Wire codecs

pub mod cursor;

pub use cursor::{CursorCodec, CursorDecodeError, CursorEncoding, DEFAULT_MAX_CURSOR_LEN};
