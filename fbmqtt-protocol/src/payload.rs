//! Payload normalization rules shared by the parser and the message model.
//!
//! Devices publish free-form UTF-8 text; before a value enters the message
//! model it is reduced to the charset the convention allows for its slot.

use crate::constants::{PAYLOAD_BOOL_TRUE, VALUE_NOT_SET};

/// Reduce a payload to the name charset `[A-Za-z0-9.,_ -]`.
pub fn clean_name(payload: &str) -> String {
    payload
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ',' | '_' | ' ' | '-'))
        .collect()
}

/// Reduce a payload to the generic value charset.
///
/// Keeps the name charset plus the range/unit punctuation the convention
/// allows: `: [ ] / "` and the unit signs `° % µ ³`.
pub fn clean_payload(payload: &str) -> String {
    payload
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    '.' | ',' | '_' | ' ' | '-' | ':' | '[' | ']' | '/' | '"' | '°' | '%' | 'µ' | '³'
                )
        })
        .collect()
}

/// Split a comma-separated payload into a normalized list.
///
/// Items are lower-cased and trimmed; empty items are dropped and duplicates
/// removed while preserving first-seen order.
pub fn clean_list(payload: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();

    for item in payload.to_lowercase().split(',') {
        let item = item.trim();

        if item.is_empty() || items.iter().any(|seen| seen == item) {
            continue;
        }

        items.push(item.to_string());
    }

    items
}

/// Decode a boolean payload.
///
/// Only the exact canonical literal `"true"` is true; every other payload is
/// false. Malformed booleans are never an error.
pub fn parse_bool(payload: &str) -> bool {
    payload == PAYLOAD_BOOL_TRUE
}

/// Map the absent-value sentinel (or an empty payload) to `None`.
pub fn present(payload: &str) -> Option<&str> {
    if payload.is_empty() || payload == VALUE_NOT_SET {
        None
    } else {
        Some(payload)
    }
}
