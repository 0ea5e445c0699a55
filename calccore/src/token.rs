//! Token classification for keypad input

/// True if `text` is exactly one ASCII digit or a decimal point.
pub fn is_digit_or_dot(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || c == '.',
        _ => false,
    }
}

/// True if `text` parses as a floating point literal.
///
/// Accepts an optional sign, an optional fractional part and an optional
/// exponent. Surrounding whitespace is tolerated. A lone `.` or sign is not
/// a number.
pub fn is_valid_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

pub fn is_empty(text: &str) -> bool {
    text.is_empty()
}
