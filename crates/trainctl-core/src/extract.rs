//! Response field extraction.
//!
//! A bounded substring search, not a JSON parser. It looks for the literal
//! pattern `"<name>":"` and returns everything up to the next `"`. That means:
//!
//! - no whitespace is allowed between the colon and the opening quote
//! - escaped quotes end the value early
//! - the first occurrence wins, even inside a nested object
//!
//! Services this harness talks to (FastAPI's compact JSON) always match the
//! pattern, so a full parser would only widen what is accepted.

/// Extract a string field from a raw JSON body.
pub fn extract_field<'a>(name: &str, body: &'a str) -> Option<&'a str> {
    let pattern = format!("\"{name}\":\"");
    let start = body.find(&pattern)? + pattern.len();
    let rest = &body[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// `task_id` shortcut used by `start`.
pub fn extract_task_id(body: &str) -> Option<&str> {
    extract_field("task_id", body)
}
