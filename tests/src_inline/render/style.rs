use super::*;

#[test]
fn test_default_canvas_is_12_by_6_inches_at_300_dpi() {
    let style = ChartStyle::default();
    assert_eq!(style.canvas_size(), (3600, 1800));
}

#[test]
fn test_points_to_pixels() {
    let style = ChartStyle::default();
    assert_eq!(style.px(72.0), 300.0);
    assert_eq!(style.px(3.0), 12.5);
    assert_eq!(style.px_i32(3.0), 13);
}

#[test]
fn test_tex_switches_to_serif() {
    let plain = ChartStyle::default();
    assert!(matches!(plain.family(), FontFamily::SansSerif));

    let tex = ChartStyle::default().with_text(TextRenderer::Tex);
    assert!(matches!(tex.family(), FontFamily::Serif));
}

#[test]
fn test_bar_offsets_straddle_tick() {
    let style = ChartStyle::default();
    assert_eq!(style.bar_width, 0.30);
    assert_eq!(style.bar_offset(0), -0.15);
    assert_eq!(style.bar_offset(1), 0.15);
}

#[test]
fn test_y_axis_is_capped_at_one() {
    assert_eq!(Y_MAX, 1.0);
}
