//! Field extraction from single lines of the restricted JSON dialect.
//!
//! Every helper is lookup-based and total: if the expected key, colon, or
//! quote is not where the dialect puts it, the helper returns `None` and
//! the caller moves on to the next line. The field may sit anywhere in a
//! comma-terminated line.

/// Value of `"key": "value"` on this line, if present and well formed.
///
/// Lookup order: quoted key, first colon after it, first quote after the
/// colon, next quote after that. The value is the text strictly between the
/// two quotes.
pub fn quoted_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let marker = format!("\"{key}\"");
    let key_at = line.find(&marker)?;
    let after_key = key_at + marker.len();
    let colon = after_key + line[after_key..].find(':')?;
    let open = colon + 1 + line[colon + 1..].find('"')?;
    let close = open + 1 + line[open + 1..].find('"')?;
    Some(&line[open + 1..close])
}

/// Value of a single-line nested field like `"outer": { "inner": "value" }`.
///
/// Both keys must appear on the same line, inner after outer; the dialect
/// never splits these sub-objects across lines.
pub fn nested_quoted_value<'a>(line: &'a str, outer: &str, inner: &str) -> Option<&'a str> {
    let outer_at = line.find(&format!("\"{outer}\""))?;
    quoted_value(&line[outer_at..], inner)
}

/// Value of `"key": <int>` on this line.
///
/// `Some(0)` when the key and colon are present but the remainder does not
/// start with a run of decimal digits; the dialect treats unparseable
/// numbers as zero rather than as errors.
pub fn int_value(line: &str, key: &str) -> Option<i32> {
    let marker = format!("\"{key}\"");
    let key_at = line.find(&marker)?;
    let after_key = key_at + marker.len();
    let colon = after_key + line[after_key..].find(':')?;
    let rest = &line[colon + 1..];
    let rest = rest.strip_suffix(',').unwrap_or(rest);
    let rest = rest.trim_start();
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    Some(rest[..digits_end].parse().unwrap_or(0))
}

/// Component entry like `[ [ "plank", 2 ] ]`: the (item id, count) pair.
///
/// Recognized by the double-bracket marker. The id is the first quoted
/// substring, the count is parsed after the first comma following its
/// closing quote; anything malformed means no pair for this line.
pub fn component_pair(line: &str) -> Option<(String, i32)> {
    let first = line.find('[')?;
    line[first + 1..].find('[')?;
    let open = line.find('"')?;
    let close = open + 1 + line[open + 1..].find('"')?;
    let item = line[open + 1..close].to_string();
    let comma = close + 1 + line[close + 1..].find(',')?;
    let rest = line[comma + 1..].trim_start();
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let count = rest[..digits_end].parse().ok()?;
    Some((item, count))
}
