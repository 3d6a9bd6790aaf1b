/// Parse a numeric text field as typed by the user.
///
/// Returns `None` for empty, unparsable or non-finite input so that callers can
/// keep the previous value instead of letting NaN reach the frequency math.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
