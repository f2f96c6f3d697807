//! End-to-end scenarios: attributes in, clip path and insets out.

use angled_geometry::{
    build_side, normalize, recompute, solve_triangle, AngledAttributes, AngledConfig, ClipLength,
    Side, SideConfig, ViewportContext,
};
use approx::assert_relative_eq;

fn desktop(config: &AngledConfig) -> ViewportContext {
    ViewportContext::from_width(1000.0, config)
}

#[test]
fn thirty_degree_top_without_triangle() {
    let config = AngledConfig::default();
    let attrs = AngledAttributes::from_pairs([("angle-top", "30")]).unwrap();
    let layout = recompute(&attrs, desktop(&config), &config);

    assert_relative_eq!(layout.top.height_px, 577.35, epsilon = 0.01);
    assert_eq!(layout.top.path.len(), 2);
    assert_relative_eq!(
        match layout.top.path[0].y {
            ClipLength::Px(y) => y,
            other => unreachable!("{other:?}"),
        },
        577.35,
        epsilon = 0.01
    );
    assert_eq!(layout.top.path[1].y, ClipLength::Px(0.0));
}

#[test]
fn flat_edge_drops_requested_triangle() {
    let config = AngledConfig::default();
    let attrs = AngledAttributes::from_pairs([
        ("angle-top", "0"),
        ("triangle-top", ""),
        ("triangle-top-size", "45"),
    ])
    .unwrap();
    let layout = recompute(&attrs, desktop(&config), &config);

    assert_eq!(layout.top.path.len(), 2);
    assert_eq!(layout.top.padding_px, 0.0);
    assert_eq!(layout.top.height_px, 0.0);
}

#[test]
fn mobile_ignores_configured_angle() {
    let config = AngledConfig::default();
    let viewport = ViewportContext::from_width(500.0, &config);

    let steep = AngledAttributes::from_pairs([("angle-top", "45"), ("triangle-top", ""), ("triangle-top-size", "80")]).unwrap();
    let shallow = AngledAttributes::from_pairs([("angle-top", "3"), ("triangle-top", ""), ("triangle-top-size", "20")]).unwrap();

    let resolved = normalize(Side::Top, &steep.side(Side::Top), &viewport, &config);
    assert_eq!(resolved.angle_degrees, 0.0);
    assert_eq!(resolved.triangle_size_edge, 45.0);

    assert_eq!(
        recompute(&steep, viewport, &config).clip_path,
        recompute(&shallow, viewport, &config).clip_path
    );
}

#[test]
fn disabled_or_sizeless_triangle_keeps_two_points() {
    let config = AngledConfig::default();
    for pairs in [
        vec![("angle-bottom", "12"), ("triangle-bottom-size", "45")],
        vec![("angle-bottom", "12"), ("triangle-bottom", ""), ("triangle-bottom-size", "0")],
        vec![("angle-bottom", "12"), ("triangle-bottom", "false"), ("triangle-bottom-size", "45")],
    ] {
        let attrs = AngledAttributes::from_pairs(pairs).unwrap();
        let layout = recompute(&attrs, desktop(&config), &config);
        assert_eq!(layout.bottom.path.len(), 2);
        assert_eq!(layout.bottom.padding_px, 0.0);
    }
}

#[test]
fn bottom_side_mirrors_top_side() {
    let config = AngledConfig::default();
    let side = SideConfig {
        angle_degrees: 9.0,
        triangle_enabled: true,
        triangle_size_edge: 45.0,
        triangle_position: None,
    };
    let viewport = desktop(&config);

    let bottom = normalize(Side::Bottom, &side, &viewport, &config);
    let as_top = angled_geometry::ResolvedSideParams { side: Side::Top, ..bottom };
    let dims = solve_triangle(bottom.angle_degrees, bottom.triangle_size_edge);

    let bottom_result = build_side(&bottom, Some(&dims), 1000.0);
    let top_result = build_side(&as_top, Some(&dims), 1000.0);

    let complemented: Vec<_> = top_result.path.iter().map(|p| p.complement()).collect();
    assert_eq!(bottom_result.path, complemented);
}

#[test]
fn malformed_attributes_degrade_to_flat() {
    let config = AngledConfig::default();
    let attrs = AngledAttributes::from_pairs([
        ("angle-top", "steep"),
        ("triangle-top", ""),
        ("triangle-top-size", "big"),
        ("triangle-top-position", "middle"),
    ])
    .unwrap();
    let layout = recompute(&attrs, desktop(&config), &config);

    assert_eq!(layout.top.height_px, 0.0);
    assert_eq!(layout.top.path.len(), 2);
    assert_eq!(layout.custom_properties()[0].1, "0px");
}
