//! Common utilities shared across dice tool definitions.
//!
//! Argument parsing with blank-means-default semantics, and helpers for
//! building tool results.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Parse a string argument as an integer, falling back to `default` when the
/// argument is blank (empty or whitespace).
///
/// Returns `None` when the argument is present but not an integer, so
/// callers can distinguish blank, malformed, and out-of-range inputs.
pub fn int_arg_or(raw: &str, default: i64) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(default);
    }
    trimmed.parse().ok()
}

/// Sign prefix for values printed with an explicit `+` when positive.
/// Negative values already carry their own sign.
pub fn plus_sign(value: i64) -> &'static str {
    if value > 0 { "+" } else { "" }
}

/// Create an error result with the given message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
