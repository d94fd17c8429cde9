use lunaphase_core::config::CalibrationConfig;
use lunaphase_core::error::LunaError;
use lunaphase_core::io::naming::DecimalStyle;
use lunaphase_core::measure::{validate_threshold, MaskParameters, OverlayOptions};
use lunaphase_core::session::SessionPhase;

// ---------------------------------------------------------------------------
// CalibrationConfig
// ---------------------------------------------------------------------------

#[test]
fn test_config_defaults() {
    let cfg = CalibrationConfig::default();
    assert_eq!(cfg.working_size, 240);
    assert_eq!(cfg.threshold, 150);
    assert_eq!(cfg.radius, 100);
    assert_eq!(cfg.crop_percent, 100);
    assert_eq!(cfg.naming, DecimalStyle::Dot);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_partial_json_fills_defaults() {
    let cfg: CalibrationConfig =
        serde_json::from_str(r#"{ "threshold": 30, "naming": "underscore" }"#).unwrap();

    assert_eq!(cfg.threshold, 30);
    assert_eq!(cfg.naming, DecimalStyle::Underscore);
    assert_eq!(cfg.radius, 100);
    assert_eq!(cfg.overlay, OverlayOptions::default());
}

#[test]
fn test_config_partial_overlay() {
    let cfg: CalibrationConfig =
        serde_json::from_str(r#"{ "overlay": { "opacity": 0.8 } }"#).unwrap();

    assert_eq!(cfg.overlay.opacity, 0.8);
    assert!(cfg.overlay.draw_boundary);
}

#[test]
fn test_config_initial_state() {
    let cfg = CalibrationConfig {
        threshold: 12,
        radius: 40,
        center_offset_x: -3,
        center_offset_y: 9,
        crop_percent: 70,
        ..CalibrationConfig::default()
    };

    let state = cfg.initial_state().unwrap();

    assert_eq!(state.index, 0);
    assert_eq!(state.threshold, 12);
    assert_eq!(state.mask, MaskParameters::new(40, -3, 9, 70).unwrap());
}

#[test]
fn test_config_rejects_out_of_range() {
    let cases = [
        CalibrationConfig { threshold: -1, ..Default::default() },
        CalibrationConfig { threshold: 256, ..Default::default() },
        CalibrationConfig { radius: 0, ..Default::default() },
        CalibrationConfig { radius: -5, ..Default::default() },
        CalibrationConfig { crop_percent: 0, ..Default::default() },
        CalibrationConfig { crop_percent: 101, ..Default::default() },
        CalibrationConfig { center_offset_y: 9000, ..Default::default() },
        CalibrationConfig { working_size: 0, ..Default::default() },
        CalibrationConfig {
            overlay: OverlayOptions { opacity: 1.5, ..Default::default() },
            ..Default::default()
        },
    ];
    for cfg in cases {
        assert!(
            matches!(cfg.validate(), Err(LunaError::InvalidParameter(_))),
            "accepted {cfg:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// MaskParameters / threshold
// ---------------------------------------------------------------------------

#[test]
fn test_mask_parameters_bounds() {
    assert!(MaskParameters::new(1, 0, 0, 1).is_ok());
    assert!(MaskParameters::new(8192, -8192, 8192, 100).is_ok());
    assert!(MaskParameters::new(8193, 0, 0, 100).is_err());
    assert!(MaskParameters::new(10, -8193, 0, 100).is_err());
    assert!(MaskParameters::new(10, i64::MIN, 0, 100).is_err());
    assert!(MaskParameters::new(10, 0, i64::MIN, 100).is_err());
    assert!(MaskParameters::new(10, i64::MAX, 0, 100).is_err());
}

#[test]
fn test_mask_parameters_builders_keep_other_fields() {
    let p = MaskParameters::new(10, 1, 2, 50).unwrap();

    let r = p.with_radius(30).unwrap();
    assert_eq!((r.radius(), r.offset_x(), r.offset_y(), r.crop_percent()), (30, 1, 2, 50));

    let o = p.with_center_offset(-4, 5).unwrap();
    assert_eq!((o.radius(), o.offset_x(), o.offset_y()), (10, -4, 5));

    assert!(p.with_crop_percent(101).is_err());
}

#[test]
fn test_validate_threshold() {
    assert_eq!(validate_threshold(0).unwrap(), 0);
    assert_eq!(validate_threshold(255).unwrap(), 255);
    assert!(validate_threshold(256).is_err());
    assert!(validate_threshold(-1).is_err());
}

#[test]
fn test_session_phase_display() {
    assert_eq!(format!("{}", SessionPhase::Empty), "Empty");
    assert_eq!(format!("{}", SessionPhase::Previewing), "Previewing");
}
