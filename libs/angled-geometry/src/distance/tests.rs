use super::*;

#[test]
fn test_parse_number_accepts_signed_decimals() {
    assert_eq!(parse_number("angle-top", "-12.5").unwrap(), -12.5);
    assert_eq!(parse_number("angle-top", "  3 ").unwrap(), 3.0);
    assert_eq!(parse_number("angle-top", "1e1").unwrap(), 10.0);
}

#[test]
fn test_parse_number_rejects_garbage() {
    let err = parse_number("angle-top", "12deg").unwrap_err();
    assert_eq!(
        err,
        AttributeError::InvalidNumber {
            attribute: "angle-top".to_string(),
            value: "12deg".to_string(),
        }
    );
    assert!(parse_number("angle-top", "").is_err());
}

#[test]
fn test_parse_number_rejects_non_finite() {
    for raw in ["NaN", "inf", "-infinity"] {
        assert!(matches!(
            parse_number("triangle-top-size", raw),
            Err(AttributeError::NonFiniteNumber { .. })
        ));
    }
}

#[test]
fn test_distance_parses_pixels_and_fractions() {
    assert_eq!(Distance::parse("p", "250px").unwrap(), Distance::Pixels(250.0));
    assert_eq!(Distance::parse("p", "250 px").unwrap(), Distance::Pixels(250.0));
    assert_eq!(Distance::parse("p", "0.75").unwrap(), Distance::Fraction(0.75));
    assert!(Distance::parse("p", "px").is_err());
    assert!(Distance::parse("p", "50%").is_err());
}

#[test]
fn test_to_fraction() {
    assert_eq!(Distance::Pixels(250.0).to_fraction(1000.0), 0.25);
    assert_eq!(Distance::Fraction(0.4).to_fraction(1000.0), 0.4);
    assert_eq!(Distance::Pixels(250.0).to_fraction(0.0), 0.0);
}

#[test]
fn test_display_matches_attribute_syntax() {
    assert_eq!(Distance::Pixels(120.0).to_string(), "120px");
    assert_eq!(Distance::Fraction(0.5).to_string(), "0.5");
    assert_eq!(
        Distance::parse("p", &Distance::Pixels(12.5).to_string()).unwrap(),
        Distance::Pixels(12.5)
    );
}
