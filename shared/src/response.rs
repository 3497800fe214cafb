//! Server error bodies
//!
//! The backend reports failures as
//! ```json
//! { "message": "Token expired" }
//! ```
//! but proxies in front of it may answer with plain text or nothing at all.

use serde_json::Value;

/// Body keys checked for a message, in order
const MESSAGE_KEYS: [&str; 2] = ["message", "error"];

/// Best-effort server message from a raw error body
///
/// JSON `message` field first, then `error`, then the trimmed text, then
/// `None` for an empty body.
pub fn server_message(body: &str) -> Option<String> {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body)
        && let Some(message) = MESSAGE_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
    {
        return Some(message.to_string());
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
