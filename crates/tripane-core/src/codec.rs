#![forbid(unsafe_code)]

//! Reversible text ⇄ URL-safe token transform.
//!
//! Tokens use the unpadded URL-safe base64 alphabet (`A-Z a-z 0-9 - _`),
//! so they can be embedded in the page address verbatim and the location
//! joiner (see [`crate::location`]) can never occur inside a token.
//!
//! `decode` failure means "no prior content": callers substitute empty
//! text rather than propagating the error.

use core::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Failure to recover text from a token.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Token contains bytes outside the codec alphabet or truncated framing.
    Base64(base64::DecodeError),
    /// Token decoded to bytes that are not valid UTF-8.
    Utf8(std::str::Utf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "malformed token: {err}"),
            Self::Utf8(err) => write!(f, "token is not valid utf-8: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(err) => Some(err),
            Self::Utf8(err) => Some(err),
        }
    }
}

/// Encode arbitrary text into a URL-safe token.
#[must_use]
pub fn encode(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Recover the original text from a token produced by [`encode`].
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token).map_err(DecodeError::Base64)?;
    String::from_utf8(bytes).map_err(|err| DecodeError::Utf8(err.utf8_error()))
}
