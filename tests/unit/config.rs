use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = HybridConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, HybridConfig::default());
    assert_eq!(cfg.background_mode, BackgroundMode::TiledStone);
    assert!(cfg.gap_background_tint.is_transparent());
}

#[test]
fn camel_case_keys_and_colors_parse() {
    let cfg = HybridConfig::from_json_str(
        r##"{
            "backgroundMode": "solidColor",
            "backgroundColor": "#102030",
            "gapBackgroundTint": [255, 0, 0, 64],
            "wideChatbox": true,
            "resizeBy": "height",
            "orbsPosition": "moreClearance",
            "customBackgroundPath": "bg.png"
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.background_mode, BackgroundMode::SolidColor);
    assert_eq!(cfg.background_color, Rgba8::opaque(0x10, 0x20, 0x30));
    assert_eq!(cfg.gap_background_tint, Rgba8::new(255, 0, 0, 64));
    assert!(cfg.wide_chatbox);
    assert_eq!(cfg.resize_by, ResizeBy::Height);
    assert_eq!(cfg.orbs_position, OrbsPosition::MoreClearance);
    assert_eq!(cfg.custom_background_path, Some(PathBuf::from("bg.png")));
}

#[test]
fn zero_aspect_term_is_rejected() {
    let err = HybridConfig::from_json_str(r#"{"aspectRatioHeight": 0}"#).unwrap_err();
    assert!(matches!(err, HybridError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = HybridConfig::from_json_str(r#"{"wideChatbox": "yes"}"#).unwrap_err();
    assert!(matches!(err, HybridError::Serde(_)));
}

#[test]
fn missing_file_is_an_error() {
    assert!(HybridConfig::from_path(Path::new("/no/such/config.json")).is_err());
}
