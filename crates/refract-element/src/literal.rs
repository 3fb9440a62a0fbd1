//! Literal parsing for the three primitive targets (§4.3.1).

/// `true`/`false`, case-sensitive, exact match only.
pub fn parse_bool(literal: &str) -> Option<bool> {
    match literal {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Any JSON-number-compatible literal. Rust's `f64::from_str` is more
/// permissive than JSON (it accepts `inf`, `infinity`, `nan`, leading `+`),
/// so the literal is validated against JSON's number grammar first.
pub fn parse_number(literal: &str) -> Option<f64> {
    if !is_json_number(literal) {
        return None;
    }
    literal.parse::<f64>().ok()
}

fn is_json_number(literal: &str) -> bool {
    let mut chars = literal.chars().peekable();

    if chars.peek() == Some(&'-') {
        chars.next();
    }

    match chars.next() {
        Some('0') => {}
        Some(c) if c.is_ascii_digit() => {
            while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                chars.next();
            }
        }
        _ => return false,
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut any = false;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            any = true;
        }
        if !any {
            return false;
        }
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut any = false;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            any = true;
        }
        if !any {
            return false;
        }
    }

    chars.next().is_none()
}

/// Any UTF-8 string; string literals never fail to parse (§4.3.1).
pub fn parse_string(literal: &str) -> String {
    literal.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_exact_match_only() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("True"), None);
        assert_eq!(parse_bool("1"), None);
    }

    #[test]
    fn number_accepts_json_shapes() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("1e10"), Some(1e10));
        assert_eq!(parse_number("1E-3"), Some(1e-3));
    }

    #[test]
    fn number_rejects_non_json_literals() {
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("infinity"), None);
        assert_eq!(parse_number("+5"), None);
        assert_eq!(parse_number("01"), None);
        assert_eq!(parse_number("5."), None);
        assert_eq!(parse_number(""), None);
    }
}
