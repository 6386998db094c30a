//! Source text preprocessing.
//!
//! Exports may carry block comments, line comments, and arbitrary line
//! breaks. [`scrub`] flattens all of these to spaces so the statement
//! parsers can treat the input as a single line. The grammar has no string
//! literals spanning newlines, so the replacement is safe.

/// Returns the source with comments and newline runs replaced by spaces.
///
/// Block comments (`/* ... */`, unterminated ones running to the end of
/// input), line comments (`// ...` up to the line break), and each run of
/// newlines collapse to a single space. Pure function, no side effects.
pub(crate) fn scrub(source: &str) -> String {
    let mut scrubbed = String::with_capacity(source.len());
    let mut rest = source;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("/*") {
            rest = match after.find("*/") {
                Some(end) => &after[end + 2..],
                None => "",
            };
            scrubbed.push(' ');
        } else if let Some(after) = rest.strip_prefix("//") {
            // The line break itself is left in place for the newline arm.
            rest = match after.find('\n') {
                Some(end) => &after[end..],
                None => "",
            };
            scrubbed.push(' ');
        } else if rest.starts_with('\n') {
            rest = rest.trim_start_matches('\n');
            scrubbed.push(' ');
        } else if let Some(c) = rest.chars().next() {
            scrubbed.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    scrubbed
}
