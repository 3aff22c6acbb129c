use super::*;
use crate::nav::section::NavEntry;
use crate::texture::descriptor::{ContentDescriptor, ContentKind};
use crate::texture::synth::TextureSize;

#[test]
fn empty_object_yields_defaults() {
    let cfg = FolioConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FolioConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.texture.cache_capacity, 32);
    assert_eq!(cfg.nav.entries.len(), 6);
    assert_eq!(cfg.nav.reference_fraction, 0.15);
    assert_eq!(cfg.hero.screens.tablet.kind, ContentKind::Label);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = FolioConfig::from_json_str(
        r##"{
            "texture": {"size": {"width": 256, "height": 128}},
            "nav": {"entries": [
                {"anchor_id": "hero", "label": "Home", "icon": "home"},
                {"anchor_id": "work", "label": "Work", "icon": "briefcase"}
            ]},
            "motion": {"smooth_scroll_ease": "Linear"}
        }"##,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(
        cfg.texture.size,
        TextureSize {
            width: 256,
            height: 128
        }
    );
    assert_eq!(cfg.texture.cache_capacity, 32);
    assert_eq!(cfg.nav.entries[1], NavEntry::new("work", "Work", "briefcase"));
    assert_eq!(cfg.nav.scroll_offset_px, 80.0);
    assert_eq!(cfg.motion.smooth_scroll_ease, Ease::Linear);
    assert_eq!(cfg.motion.smooth_scroll_ms, 600);
}

#[test]
fn json_round_trip_preserves_screens() {
    let mut cfg = FolioConfig::default();
    cfg.hero.screens.tablet = ContentDescriptor::label("HELLO", "#000000", "#ffffff");
    let back = FolioConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        FolioConfig::from_json_str("{ nope"),
        Err(FolioError::Serde(_))
    ));
}

#[test]
fn validation_rejects_bad_values() {
    let mut cfg = FolioConfig::default();
    cfg.texture.size.width = 0;
    assert!(matches!(cfg.validate(), Err(FolioError::Config(_))));

    let mut cfg = FolioConfig::default();
    cfg.texture.cache_capacity = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = FolioConfig::default();
    cfg.hero.asset_id = "../outside.json".into();
    assert!(cfg.validate().is_err());

    let mut cfg = FolioConfig::default();
    cfg.nav.entries.push(NavEntry::new("home", "Again", "home"));
    assert!(cfg.validate().is_err());

    let mut cfg = FolioConfig::default();
    cfg.nav.entries.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = FolioConfig::default();
    cfg.nav.reference_fraction = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = FolioConfig::default();
    cfg.marquee.speed_px_per_s = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reads_and_validates_file() {
    let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"texture": {"cache_capacity": 4}}"#).unwrap();
    assert_eq!(FolioConfig::load(&good).unwrap().texture.cache_capacity, 4);

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{"texture": {"cache_capacity": 0}}"#).unwrap();
    assert!(FolioConfig::load(&bad).is_err());

    assert!(matches!(
        FolioConfig::load(dir.join("missing.json")),
        Err(FolioError::Config(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn motion_config_builds_viewport() {
    use crate::motion::viewport::DocumentGeometry;
    let vp = MotionConfig::default().viewport();
    assert_eq!(vp.viewport_height(), 800.0);
    assert_eq!(vp.width(), 1280.0);
}
