//! JSON embedding inside `<script type="application/json">` blocks.
//!
//! Titles come straight from user listings, so a title such as
//! `</script><script>…` must not be able to close the data block. After
//! serialization, every `<`, `>` and `&` is written as a `\uXXXX` escape,
//! along with U+2028/U+2029 (line terminators in older JavaScript engines).
//! These characters can only occur inside JSON strings, where the escapes
//! decode back to the original text, so `JSON.parse` sees exactly the
//! serialized value.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use serde::Serialize;

/// Serializes `value` to JSON that is safe to place verbatim inside a
/// `<script>` element.
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).or_raise(|| ErrorKind::Serialize)?;
    Ok(escape_script_json(&json))
}

fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
