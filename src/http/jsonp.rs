//! JSONP callback validation and wrapping.
//!
//! # Responsibilities
//! - Validate the `callback` token against a JS function-reference grammar
//! - Wrap serialized content as a JSONP invocation
//!
//! # Design Decisions
//! - Invalid tokens fail the whole request (400); the token is never
//!   sanitized into the body
//! - The `/**/` prefix defends against content-type sniffing of JSONP
//!   responses and is a bit-exact contract

use crate::error::EndpointError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Dotted JS identifier segments: `foo`, `$ns._cb`, `app.router.v2`.
static CALLBACK_GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[$A-Za-z_][$\w]*(\.[$A-Za-z_][$\w]*)*$").unwrap());

/// Whether `token` is an acceptable JSONP callback reference.
pub fn validate_callback(token: &str) -> bool {
    CALLBACK_GRAMMAR.is_match(token)
}

/// Wrap `content` in a JSONP invocation of `callback`, when present.
///
/// Without a callback the content passes through unchanged. An invalid
/// callback aborts with `InvalidCallback`.
pub fn wrap(content: &str, callback: Option<&str>) -> Result<String, EndpointError> {
    match callback {
        None => Ok(content.to_string()),
        Some(token) if validate_callback(token) => Ok(format!("/**/{}({});", token, content)),
        Some(_) => Err(EndpointError::InvalidCallback),
    }
}
