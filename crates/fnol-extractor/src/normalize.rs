//! Value normalization applied to raw pattern captures

/// Trim and collapse every whitespace run to a single space
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a currency capture such as `$12,500.00`
///
/// Dollar signs and thousands separators are stripped; what remains must be
/// plain digits with at most one decimal point. Signs, exponents and words
/// yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();

    let digits = cleaned.chars().filter(char::is_ascii_digit).count();
    let points = cleaned.chars().filter(|c| *c == '.').count();
    if digits == 0 || points > 1 || digits + points != cleaned.len() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
