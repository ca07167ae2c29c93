//! Compact number formatting for legend labels

/// SI prefixes from 10^3 up to 10^24
const SI_PREFIXES: [&str; 8] = ["k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Format a break value for a legend label
///
/// The notation depends on magnitude:
///
/// | magnitude          | rule                                   | example             |
/// |--------------------|----------------------------------------|---------------------|
/// | `|x| < 1`          | 4 decimals                             | `0.12345 -> 0.1235` |
/// | `|x| < 1000`       | 4 significant digits                   | `123.456 -> 123.5`  |
/// | `|x| < 10000`      | thousands separator, up to 2 decimals  | `1234.5 -> 1,234.5` |
/// | otherwise          | 4 significant digits with SI prefix    | `12345 -> 12.35k`   |
///
/// Trailing zeros are always trimmed. Zero is `"0"` and non-finite values use
/// their `Display` form.
///
/// # Examples
///
/// ```rust
/// use classbreaks_legend::format_number;
///
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-1234.567), "-1,234.57");
/// assert_eq!(format_number(2_500_000.0), "2.5M");
/// ```
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let magnitude = x.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    let body = if magnitude < 1.0 {
        trim_zeros(format!("{magnitude:.4}"))
    } else if magnitude < 1000.0 {
        significant(magnitude)
    } else if magnitude < 10000.0 {
        grouped(magnitude)
    } else {
        si_prefixed(magnitude)
    };
    if x < 0.0 && body != "0" {
        format!("-{body}")
    } else {
        body
    }
}

fn trim_zeros(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Four significant digits, fixed notation, for `1 <= x < 1000`
fn significant(x: f64) -> String {
    let exponent = x.log10().floor() as i32;
    let decimals = (3 - exponent).max(0) as usize;
    trim_zeros(format!("{x:.decimals$}"))
}

/// Comma-grouped integer part with up to two decimals
fn grouped(x: f64) -> String {
    let text = trim_zeros(format!("{x:.2}"));
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };
    let mut out = String::with_capacity(text.len() + 2);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Four significant digits scaled to an SI prefix, for `x >= 10000`
fn si_prefixed(x: f64) -> String {
    // Round to four significant digits first so 999_950 becomes 1M, not 1000k
    let mut exponent = x.log10().floor() as i32;
    let mut digits = (x / 10f64.powi(exponent - 3)).round();
    if digits >= 10000.0 {
        exponent += 1;
        digits = (digits / 10.0).round();
    }
    let group = (exponent / 3).clamp(1, SI_PREFIXES.len() as i32);
    let shift = exponent - 3 - 3 * group;
    let mantissa = digits * 10f64.powi(shift);
    let decimals = (-shift).max(0) as usize;
    let prefix = SI_PREFIXES[(group - 1) as usize];
    format!("{}{prefix}", trim_zeros(format!("{mantissa:.decimals$}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_magnitudes() {
        assert_eq!(format_number(0.12345), "0.1235");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(0.00001), "0");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(3.14159), "3.142");
        assert_eq!(format_number(123.456), "123.5");
        assert_eq!(format_number(5.5), "5.5");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(9876.543), "9,876.54");
    }

    #[test]
    fn test_si_prefixes() {
        assert_eq!(format_number(10000.0), "10k");
        assert_eq!(format_number(12345.0), "12.35k");
        assert_eq!(format_number(999_950.0), "1M");
        assert_eq!(format_number(123_456_789.0), "123.5M");
        assert_eq!(format_number(-4.2e9), "-4.2G");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
