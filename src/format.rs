use crate::config::Config;

/// Renders a number back into decorated text: round to `decimals` fractional
/// digits (half away from zero), group the integer part every three digits
/// when `grouped`, wrap in the configured prefix/suffix.
///
/// Pure: identical inputs always produce identical output. The rounded value
/// is materialized as a scaled integer so the digits are exact rather than
/// re-rounded by float formatting.
pub fn format_value(value: f64, decimals: u32, grouped: bool, config: &Config) -> String {
    let factor = 10f64.powi(decimals as i32);
    // f64::round rounds half away from zero.
    let scaled = (value * factor).round() as i128;
    let negative = scaled < 0;
    let digits = scaled.unsigned_abs().to_string();

    let (int_part, frac_part) = split_at_point(&digits, decimals);
    let int_part = if grouped && !config.separator.is_empty() {
        group_thousands(&int_part, &config.separator)
    } else {
        int_part
    };

    let mut out = String::with_capacity(
        config.prefix.len() + int_part.len() + 1 + frac_part.len() + config.suffix.len(),
    );
    out.push_str(&config.prefix);
    if negative {
        out.push('-');
    }
    out.push_str(&int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out.push_str(&config.suffix);
    out
}

fn split_at_point(digits: &str, decimals: u32) -> (String, String) {
    if decimals == 0 {
        return (digits.to_string(), String::new());
    }
    // Left-pad so values below 1 keep an explicit integer zero ("0.05").
    let width = decimals as usize + 1;
    let padded = format!("{digits:0>width$}");
    let split = padded.len() - decimals as usize;
    (padded[..split].to_string(), padded[split..].to_string())
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + separator.len() * (len / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
