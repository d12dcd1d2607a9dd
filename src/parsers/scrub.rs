use serde_json::Value;

/// Control characters that break re-serialization downstream.
///
/// Tab, newline and carriage return are legitimate message content and
/// survive; everything else below U+0020 is dropped.
fn is_disallowed_control(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}'
    )
}

/// Recursively remove disallowed control characters from every string in a
/// parsed JSON value, so the record can always be safely re-serialized.
pub fn scrub_strings(value: &mut Value) {
    match value {
        Value::String(s) => {
            if s.chars().any(is_disallowed_control) {
                *s = s.chars().filter(|c| !is_disallowed_control(*c)).collect();
            }
        }
        Value::Array(items) => {
            for item in items {
                scrub_strings(item);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                scrub_strings(item);
            }
        }
        _ => {}
    }
}
