//! Total accessors over untyped protocol documents.
//!
//! Protocol fields are optional far more often than not, so a missing key or a value of an
//! unexpected type is never reported as an error here: every accessor falls back to the default
//! supplied by the caller. A document that is not an object at all is treated as an object
//! without keys.

use serde_json::Value;

/// Return the boolean at `key`, or `default` if it is absent or not a boolean.
pub fn read_bool(message: &Value, key: &str, default: bool) -> bool {
    message.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Return the string at `key`, or `default` if it is absent or not a string.
pub fn read_str<'a>(message: &'a Value, key: &str, default: &'a str) -> &'a str {
    message.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Return the nested object at `key`, or `default` if it is absent or not an object.
pub fn read_object<'a>(message: &'a Value, key: &str, default: &'a Value) -> &'a Value {
    match message.get(key) {
        Some(value @ Value::Object(_)) => value,
        _ => default,
    }
}

/// Return the array at `key`, or `default` if it is absent or not an array.
pub fn read_array<'a>(message: &'a Value, key: &str, default: &'a [Value]) -> &'a [Value] {
    message
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(default)
}

/// Return the integer at `key`, or `default` if it is absent or not an integer.
///
/// Floating point numbers, numeric strings and unsigned values that don't fit into `i64`
/// all resolve to `default`.
pub fn read_int(message: &Value, key: &str, default: i64) -> i64 {
    message.get(key).and_then(Value::as_i64).unwrap_or(default)
}

/// Same as `isspace` in the "C" locale, `char::is_ascii_whitespace` doesn't accept `\x0b`.
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Remove leading and trailing whitespaces.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_c_space)
}

/// Prefix of a static or member variable name.
const SCOPE_SIGIL: &str = "::$";
/// Prefix of a runtime variable name.
const VARIABLE_SIGIL: char = '$';

/// Remove a variable name prefix (`$name` or `::$name`) if any.
///
/// Only one prefix is removed: `$$name` becomes `$name`.
pub fn strip_variable_sigil(name: &str) -> &str {
    name.strip_prefix(SCOPE_SIGIL)
        .or_else(|| name.strip_prefix(VARIABLE_SIGIL))
        .unwrap_or(name)
}
