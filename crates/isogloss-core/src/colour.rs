//! Colour-with-alpha codec.
//!
//! Graph exports encode edge opacity in the trailing byte pair of an
//! eight-digit hex colour (`#RRGGBBAA`). [`decode`] splits such a value into
//! the plain colour and an opacity in `[0.0, 1.0]`; everything else passes
//! through untouched.

/// Splits a `#RRGGBBAA` value into its colour and opacity parts.
///
/// The opacity is the trailing byte pair interpreted as an integer 0–255
/// over 255.0. Any other shape (named colour, short hex, malformed hex
/// digits) comes back unchanged with no opacity. Never fails.
pub fn decode(value: &str) -> (&str, Option<f64>) {
    let bytes = value.as_bytes();
    if bytes.len() == 9 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit) {
        if let Ok(alpha) = u8::from_str_radix(&value[7..], 16) {
            return (&value[..7], Some(f64::from(alpha) / 255.0));
        }
    }
    (value, None)
}
