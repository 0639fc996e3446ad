//! Device payload flow: JSON in, all formats out, JSON back to the device.

use serde_json::json;
use zcolor::{
    AnyColor, ColorFormat, Fallback, Gamut, GamutRegistry, ZigbeeColor, convert_color_to_string,
    convert_from_color, convert_from_color_json, convert_string_to_color, convert_to_color,
    convert_value_to_color,
};

fn channels_close(a: [f64; 3], b: [f64; 3], tol: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

#[test]
fn test_every_format_agrees_after_conversion() {
    let registry = GamutRegistry::standard();
    for (key, space) in registry.iter() {
        let gamut = Gamut::new(&registry, space);
        let source = convert_value_to_color("color_rgb", &json!({"r": 200, "g": 80, "b": 30}), &gamut);
        assert_eq!(source.fallback, None);
        let color = source.color;

        for format in [ColorFormat::Rgb, ColorFormat::Hex, ColorFormat::Hs] {
            let payload = convert_from_color(&color, format);
            let mut again = convert_to_color(&payload, &gamut);
            if format == ColorFormat::Hs {
                // color_hs payloads carry no value component
                let [h, s, _] = again.color_hs;
                again = zcolor::unified::color_from_hsv([h, s, color.color_hs[2]], &gamut);
            }
            assert!(
                channels_close(color.color_rgb, again.color_rgb, 1.0),
                "{key} via {format}: {:?} vs {:?}",
                color.color_rgb,
                again.color_rgb
            );
        }
    }
}

#[test]
fn test_xy_payload_with_luminance_round_trips() {
    let registry = GamutRegistry::standard();
    let gamut = Gamut::resolve(&registry, "display_p3").unwrap();

    let color = convert_to_color(&AnyColor::Rgb(zcolor::RgbColor::new(30.0, 120.0, 220.0)), &gamut);
    let payload = zcolor::convert_from_color_with_luminance(&color, ColorFormat::Xy);
    let back = convert_to_color(&payload, &gamut);
    assert!(channels_close(color.color_rgb, back.color_rgb, 1.0));
}

#[test]
fn test_device_json_shapes() {
    let registry = GamutRegistry::standard();
    let gamut = Gamut::resolve(&registry, "srgb").unwrap();
    let color = convert_to_color(&AnyColor::Rgb(zcolor::RgbColor::new(255.0, 0.0, 0.0)), &gamut);

    assert_eq!(
        convert_from_color_json(&color, ColorFormat::Rgb).unwrap(),
        json!({"r": 255.0, "g": 0.0, "b": 0.0})
    );
    assert_eq!(
        convert_from_color_json(&color, ColorFormat::Hex).unwrap(),
        json!({"hex": "#ff0000"})
    );

    let xy = convert_from_color_json(&color, ColorFormat::Xy).unwrap();
    let x = xy["x"].as_f64().unwrap();
    let y = xy["y"].as_f64().unwrap();
    assert!((x - 0.64).abs() < 1e-6 && (y - 0.33).abs() < 1e-6);
    assert!(xy.get("Y").is_none());
}

#[test]
fn test_zigbee_color_serializes_by_field_name() {
    let registry = GamutRegistry::standard();
    let gamut = Gamut::default_of(&registry);
    let color = convert_to_color(&AnyColor::Rgb(zcolor::RgbColor::new(0.0, 0.0, 0.0)), &gamut);

    let value = serde_json::to_value(&color).unwrap();
    assert_eq!(value["color_rgb"], json!([0.0, 0.0, 0.0]));
    assert_eq!(value["hex"], json!("#000000"));

    let back: ZigbeeColor = serde_json::from_value(value).unwrap();
    assert_eq!(back, color);
}

#[test]
fn test_fallbacks_never_fail() {
    let registry = GamutRegistry::standard();
    let gamut = Gamut::default_of(&registry);

    let cases = [
        ("color_temp", json!(250), Fallback::UnknownFormat),
        ("color_rgb", json!([1, 2, 3]), Fallback::InvalidPayload),
        ("color_xy", json!({"x": "a"}), Fallback::InvalidPayload),
        ("color_xy", json!({"x": 0.3, "y": 0.0}), Fallback::DegenerateChromaticity),
    ];
    for (format, value, reason) in cases {
        let converted = convert_value_to_color(format, &value, &gamut);
        assert_eq!(converted.fallback, Some(reason), "{format} {value}");
        assert_eq!(converted.color.color_rgb, [255.0; 3]);
    }
}

#[test]
fn test_editor_text_flow() {
    let registry = GamutRegistry::standard();
    let gamut = Gamut::resolve(&registry, "hue_gamut_c").unwrap();

    let color = convert_string_to_color("#FF8000", ColorFormat::Hex, &gamut);
    let text = convert_color_to_string(&color);
    assert_eq!(text.hex, "#ff8000");
    assert_eq!(text.color_rgb, "255, 128, 0");

    let again = convert_string_to_color(&text.color_rgb, ColorFormat::Rgb, &gamut);
    assert_eq!(again.hex, "#ff8000");
}
