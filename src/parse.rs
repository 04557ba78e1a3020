use crate::config::{Config, DecimalMode};
use crate::error::ParseError;

/// Numeric payload extracted from decorated source text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedValue {
    pub number: f64,
    pub decimals: u32,
    pub grouped: bool,
}

/// Extracts the target number and its formatting metadata from decorated
/// text like `"1,500"` or `"$5,000+"`.
pub fn parse_value(raw: &str, config: &Config) -> Result<ParsedValue, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = text.strip_prefix(config.prefix.as_str()).unwrap_or(text);
    let text = text.strip_suffix(config.suffix.as_str()).unwrap_or(text);

    let grouped = !config.separator.is_empty() && text.contains(config.separator.as_str());
    let cleaned = if grouped {
        text.replace(config.separator.as_str(), "")
    } else {
        text.to_string()
    };

    if !is_plain_number(&cleaned) {
        return Err(ParseError::NotANumber(cleaned));
    }
    let number: f64 = cleaned
        .parse()
        .map_err(|_| ParseError::NotANumber(cleaned.clone()))?;

    let decimals = match config.decimals {
        DecimalMode::Fixed(n) => n,
        DecimalMode::Auto => fraction_digits(&cleaned),
    };

    Ok(ParsedValue {
        number,
        decimals,
        grouped,
    })
}

/// Grammar: `[+-]? digits (. digits)? ([eE][+-]? digits)?`.
fn is_plain_number(s: &str) -> bool {
    let mut chars = s.chars().peekable();

    if matches!(chars.peek(), Some('+' | '-')) {
        chars.next();
    }
    let mut int_digits = 0usize;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        int_digits += 1;
    }
    if int_digits == 0 {
        return false;
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac_digits = 0usize;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return false;
        }
    }

    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        let mut exp_digits = 0usize;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

/// Digits between the decimal point and the exponent (0 when no point).
fn fraction_digits(s: &str) -> u32 {
    let Some(dot) = s.find('.') else {
        return 0;
    };
    s[dot + 1..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count() as u32
}
