use super::*;

#[test]
fn exactly_one_shadow_caster_and_it_is_the_key_light() {
    let casters: Vec<_> = LightingRig::lights()
        .iter()
        .filter(|l| l.casts_shadow)
        .collect();
    assert_eq!(casters.len(), 1);
    assert_eq!(casters[0].kind, LightKind::Directional);
    assert_eq!(casters[0].intensity, 1.5);
}

#[test]
fn rig_composition() {
    let lights = LightingRig::lights();
    let count = |k: LightKind| lights.iter().filter(|l| l.kind == k).count();
    assert_eq!(count(LightKind::Ambient), 1);
    assert_eq!(count(LightKind::Directional), 2);
    assert_eq!(count(LightKind::Point), 1);

    for l in lights {
        assert_eq!(l.position.is_none(), l.kind == LightKind::Ambient);
        assert_eq!(l.falloff_distance.is_some(), l.kind == LightKind::Point);
    }
}

#[test]
fn serializes_colors_as_hex() {
    let json = serde_json::to_value(LightingRig::lights()).unwrap();
    assert_eq!(json[2]["color"], "#e6f0ff");
    assert_eq!(json[0]["kind"], "ambient");
}
