use super::*;

#[test]
fn test_default_state_is_flat() {
    let attrs = AngledAttributes::default();
    for side in Side::ALL {
        let cfg = attrs.side(side);
        assert_eq!(cfg.angle_degrees, 0.0);
        assert!(!cfg.wants_triangle());
        assert_eq!(cfg.triangle_position, None);
    }
}

#[test]
fn test_set_attribute_routes_to_side() {
    let mut attrs = AngledAttributes::default();
    attrs.set_attribute(ANGLE_BOTTOM, Some("-7.5")).unwrap();
    attrs.set_attribute(TRIANGLE_BOTTOM_SIZE, Some("60")).unwrap();
    attrs.set_attribute(TRIANGLE_BOTTOM_POSITION, Some("0.3")).unwrap();

    let bottom = attrs.side(Side::Bottom);
    assert_eq!(bottom.angle_degrees, -7.5);
    assert_eq!(bottom.triangle_size_edge, 60.0);
    assert_eq!(bottom.triangle_position, Some(Distance::Fraction(0.3)));
    assert_eq!(attrs.side(Side::Top), SideConfig::default());
}

#[test]
fn test_malformed_numbers_reset_to_zero() {
    let mut attrs = AngledAttributes::default();
    attrs.set_attribute(ANGLE_TOP, Some("12")).unwrap();
    attrs.set_attribute(TRIANGLE_TOP_SIZE, Some("45")).unwrap();

    attrs.set_attribute(ANGLE_TOP, Some("twelve")).unwrap();
    attrs.set_attribute(TRIANGLE_TOP_SIZE, Some("NaN")).unwrap();

    assert_eq!(attrs.angle_top, 0.0);
    assert_eq!(attrs.triangle_top_size, 0.0);
}

#[test]
fn test_malformed_position_keeps_previous() {
    let mut attrs = AngledAttributes::default();
    attrs.set_attribute(TRIANGLE_TOP_POSITION, Some("200px")).unwrap();
    attrs.set_attribute(TRIANGLE_TOP_POSITION, Some("middle")).unwrap();
    assert_eq!(attrs.triangle_top_position, Some(Distance::Pixels(200.0)));
}

#[test]
fn test_removal_clears_values() {
    let mut attrs = AngledAttributes::from_pairs([
        (ANGLE_TOP, "10"),
        (TRIANGLE_TOP, ""),
        (TRIANGLE_TOP_POSITION, "0.5"),
    ])
    .unwrap();

    attrs.set_attribute(ANGLE_TOP, None).unwrap();
    attrs.set_attribute(TRIANGLE_TOP, None).unwrap();
    attrs.set_attribute(TRIANGLE_TOP_POSITION, None).unwrap();

    assert_eq!(attrs, AngledAttributes::default());
}

#[test]
fn test_triangle_toggle_semantics() {
    let mut attrs = AngledAttributes::default();
    for (raw, expected) in [("", true), ("true", true), ("triangle-top", true), ("false", false)] {
        attrs.set_attribute(TRIANGLE_TOP, Some(raw)).unwrap();
        assert_eq!(attrs.triangle_top, expected, "value {raw:?}");
    }
}

#[test]
fn test_unknown_attribute_is_rejected() {
    let mut attrs = AngledAttributes::default();
    assert_eq!(
        attrs.set_attribute("angle-left", Some("4")),
        Err(AttributeError::UnknownAttribute("angle-left".to_string()))
    );
    assert!(AngledAttributes::from_pairs([("class", "hero")]).is_err());
}

#[test]
fn test_attribute_pairs_reparse_to_same_state() {
    let attrs = AngledAttributes::from_pairs([
        (ANGLE_TOP, "-3.5"),
        (ANGLE_BOTTOM, "2"),
        (TRIANGLE_TOP, ""),
        (TRIANGLE_TOP_SIZE, "45"),
        (TRIANGLE_TOP_POSITION, "80px"),
        (TRIANGLE_BOTTOM_POSITION, "0.25"),
    ])
    .unwrap();

    let pairs = attrs.to_attribute_pairs();
    let reparsed =
        AngledAttributes::from_pairs(pairs.iter().map(|(name, value)| (*name, value.as_str()))).unwrap();

    assert_eq!(reparsed, attrs);
    assert!(pairs.iter().all(|(name, _)| ATTRIBUTE_NAMES.contains(name)));
}

#[test]
fn test_empty_state_serializes_to_no_attributes() {
    assert!(AngledAttributes::default().to_attribute_pairs().is_empty());
}
