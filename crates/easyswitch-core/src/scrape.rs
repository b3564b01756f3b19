// ── Quasi-JSON extraction ──
//
// The console renders device state as JavaScript object literals inside
// inline <script> blocks. This module is a deliberately small grammar over
// that text: tag blocks are matched non-recursively (the first closing tag
// ends a block) and attribute values are recognised by five shapes tried
// in a fixed order, first match wins. Nothing here knows which page or
// field it is reading, and nothing here fails: a miss is `None`.

use regex::Regex;
use tracing::trace;

/// Value shapes tried by [`extract_attribute`], in priority order.
///
/// The first three are scalars and get their quotes stripped; the list and
/// dict shapes hand back the raw inner text for the caller to split.
const VALUE_SHAPES: [&str; 5] = [
    // single-quoted string
    r"('[^']*')",
    // boolean literal
    r"(true|false)\b",
    // bare number, hex or decimal
    r"(0[xX][0-9A-Fa-f]+|-?[0-9]+(?:\.[0-9]+)?)",
    // bracketed list
    r"\[([^\]]*)\]",
    // brace-delimited dict
    r"\{([^}]*)\}",
];

/// Number of leading [`VALUE_SHAPES`] whose match is unwrapped of quotes.
const SCALAR_SHAPES: usize = 3;

/// Text between the `occurrence`-th (0-based) opening `<tag ...>` and the
/// first `</tag>` after it.
///
/// Tag names match case-insensitively and blocks may span lines. Nested
/// tags of the same name are not tracked.
pub fn extract_tag_content<'a>(document: &'a str, tag: &str, occurrence: usize) -> Option<&'a str> {
    let tag = regex::escape(tag);
    let re = Regex::new(&format!(r"(?is)<{tag}\b[^>]*>(.*?)</{tag}\s*>")).ok()?;
    let content = re
        .captures_iter(document)
        .nth(occurrence)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    if content.is_none() {
        trace!(tag = %tag, occurrence, "tag block not found");
    }
    content
}

/// Raw value of a `name = <value>;` statement, trimmed.
///
/// The value ends at the first semicolon.
pub fn extract_variable<'a>(script: &'a str, name: &str) -> Option<&'a str> {
    let name = regex::escape(name);
    let re = Regex::new(&format!(r"\b{name}\s*=\s*([^;]*);")).ok()?;
    re.captures(script)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Value bound to `name:` inside an object literal.
///
/// Shapes are tried in order: single-quoted string, boolean, number,
/// bracketed list, brace dict. Each shape is searched across the whole
/// script before the next one is tried.
pub fn extract_attribute<'a>(script: &'a str, name: &str) -> Option<&'a str> {
    let name = regex::escape(name);
    for (idx, shape) in VALUE_SHAPES.iter().enumerate() {
        let re = Regex::new(&format!(r"\b{name}\s*:\s*{shape}")).ok()?;
        if let Some(m) = re.captures(script).and_then(|c| c.get(1)) {
            let raw = m.as_str();
            return Some(if idx < SCALAR_SHAPES {
                strip_quotes(raw)
            } else {
                raw
            });
        }
    }
    trace!(attribute = %name, "attribute not found");
    None
}

/// Remove one matching pair of surrounding `"` or `'` quotes.
pub fn strip_quotes(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|q| text.strip_prefix(q).and_then(|t| t.strip_suffix(q)))
        .unwrap_or(text)
}

/// Split the raw body of a bracketed list into trimmed elements.
///
/// A trailing comma does not produce an empty last element; an empty body
/// yields no elements.
pub fn split_list(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let mut items: Vec<&str> = raw.split(',').map(str::trim).collect();
    if items.last().is_some_and(|s| s.is_empty()) {
        items.pop();
    }
    items
}
