//! Tolerant parsing of string-encoded stat values and labels
//!
//! Every contribution source goes through these helpers, so the handling of
//! inline percent signs, bracketed qualifiers and malformed numbers is the
//! same everywhere.

/// Coerce a stat value string to a number
///
/// Percent signs are stripped; anything that does not parse to a finite
/// number becomes 0.
pub fn to_num(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '%').collect();
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Strip a bracketed qualifier: `"Attack[Lv.3]"` -> `"Attack"`
pub fn normalize_label(raw: &str) -> &str {
    raw.split('[').next().unwrap_or(raw).trim()
}

/// Whether a raw value carries a percent marker
pub fn has_percent(raw: &str) -> bool {
    raw.contains('%')
}

/// Split a `"<label> <value>"` effect description into its first two
/// space-separated tokens
///
/// Anything after the value token is ignored. The value is empty when the
/// description carries none; `None` only when there is no label at all.
pub fn split_description(desc: &str) -> Option<(&str, &str)> {
    let mut tokens = desc.trim().split(' ');
    let label = tokens.next().filter(|l| !l.is_empty())?;
    Some((label, tokens.next().unwrap_or("")))
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_num_plain_and_percent() {
        assert!((to_num("120") - 120.0).abs() < f64::EPSILON);
        assert!((to_num(" 12.5% ") - 12.5).abs() < f64::EPSILON);
        assert!((to_num("-3") + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_num_malformed_is_zero() {
        assert_eq!(to_num(""), 0.0);
        assert_eq!(to_num("abc"), 0.0);
        assert_eq!(to_num("12a"), 0.0);
        assert_eq!(to_num("inf"), 0.0);
        assert_eq!(to_num("NaN"), 0.0);
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("暴擊[突破]"), "暴擊");
        assert_eq!(normalize_label("攻擊力"), "攻擊力");
        assert_eq!(normalize_label(" Critical [x] "), "Critical");
    }

    #[test]
    fn test_split_description() {
        assert_eq!(split_description("暴擊 42"), Some(("暴擊", "42")));
        assert_eq!(split_description("Foobar 4.5%"), Some(("Foobar", "4.5%")));
        assert_eq!(split_description("暴擊 20 (PvE)"), Some(("暴擊", "20")));
        assert_eq!(split_description("Foobar"), Some(("Foobar", "")));
        assert_eq!(split_description(""), None);
        assert_eq!(split_description("   "), None);
    }

    #[test]
    fn test_round2() {
        assert!((round2(12.345_678) - 12.35).abs() < 1e-9);
        assert!((round2(10.0) - 10.0).abs() < f64::EPSILON);
        assert!((round2(0.1 * 33.0) - 3.3).abs() < 1e-9);
    }
}
