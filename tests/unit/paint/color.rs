use super::*;
use serde_json::json;

#[test]
fn blend_endpoints_and_midpoint() {
    let a = Argb::from_argb(255, 0, 0, 0);
    let b = Argb::from_argb(255, 200, 100, 50);
    assert_eq!(blend(a, b, 0.0), a);
    assert_eq!(blend(a, b, 1.0), b);
    assert_eq!(blend(a, b, 0.5), Argb::from_argb(255, 100, 50, 25));
}

#[test]
fn blend_clamps_t() {
    let a = Argb::GRAY;
    let b = Argb::RED;
    assert_eq!(blend(a, b, -3.0), a);
    assert_eq!(blend(a, b, 7.0), b);
    assert_eq!(blend(a, b, f64::NAN), a);
}

#[test]
fn blend_interpolates_alpha_too() {
    let c = blend(Argb::TRANSPARENT, Argb::WHITE, 0.5);
    assert_eq!(c.a(), 128);
    assert_eq!(c.r(), 128);
}

#[test]
fn parses_hex_rgb_and_argb() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c.0, Argb::RED);

    let c: ColorDef = serde_json::from_value(json!("#800000FF")).unwrap();
    assert_eq!(c.0, Argb::from_argb(0x80, 0, 0, 0xFF));
}

#[test]
fn parses_arrays_and_packed_ints() {
    let c: ColorDef = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c.0, Argb::from_argb(255, 10, 20, 30));

    let c: ColorDef = serde_json::from_value(json!([1, 10, 20, 30])).unwrap();
    assert_eq!(c.0, Argb::from_argb(1, 10, 20, 30));

    let c: ColorDef = serde_json::from_value(json!(0xFF00FF00u32)).unwrap();
    assert_eq!(c.0, Argb(0xFF00_FF00));
}

#[test]
fn rejects_bad_colors() {
    assert!(serde_json::from_value::<ColorDef>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#zzzzzz")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!([1, 2])).is_err());
}

#[test]
fn serializes_as_argb_hex() {
    let v = serde_json::to_value(ColorDef(Argb(0xFF9E9E9E))).unwrap();
    assert_eq!(v, json!("#FF9E9E9E"));
}
