use tickup::{Config, DecimalMode, format_value, parse_value};

/// Parsing decorated text and formatting the parsed number back must
/// reproduce the original decoration exactly.
#[test]
fn format_after_parse_reproduces_decorated_text() {
    let plain = Config::default();
    let money = Config {
        prefix: "$".to_string(),
        suffix: "+".to_string(),
        ..Config::default()
    };

    let cases: &[(&str, &Config)] = &[
        ("1,500", &plain),
        ("2500.50", &plain),
        ("12", &plain),
        ("0.25", &plain),
        ("-1,234.5", &plain),
        ("1,000,000", &plain),
        ("$5,000+", &money),
        ("$0.99+", &money),
    ];

    for (text, config) in cases {
        let parsed = parse_value(text, config).unwrap();
        let rendered = format_value(parsed.number, parsed.decimals, parsed.grouped, config);
        assert_eq!(&rendered, text);
    }
}

#[test]
fn fixed_decimals_round_trip_the_numeric_value() {
    let config = Config {
        decimals: DecimalMode::Fixed(2),
        ..Config::default()
    };
    let parsed = parse_value("1,500", &config).unwrap();
    assert_eq!(parsed.number, 1_500.0);
    assert_eq!(
        format_value(parsed.number, parsed.decimals, parsed.grouped, &config),
        "1,500.00"
    );
}

#[test]
fn exponent_input_renders_in_plain_notation() {
    let config = Config::default();
    let parsed = parse_value("1.5e3", &config).unwrap();
    assert_eq!(
        format_value(parsed.number, parsed.decimals, parsed.grouped, &config),
        "1500.0"
    );
}

#[test]
fn custom_separator_is_honored_both_ways() {
    let config = Config {
        separator: ".".to_string(),
        decimals: DecimalMode::Fixed(0),
        ..Config::default()
    };
    let parsed = parse_value("1.500", &config).unwrap();
    assert_eq!(parsed.number, 1_500.0);
    assert!(parsed.grouped);
    assert_eq!(
        format_value(parsed.number, parsed.decimals, parsed.grouped, &config),
        "1.500"
    );
}
