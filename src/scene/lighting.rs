use crate::foundation::core::{Rgba8, Vec3};

/// Light category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Uniform fill with no position.
    Ambient,
    /// Parallel rays from `position` toward the origin.
    Directional,
    /// Omnidirectional light with distance falloff.
    Point,
}

/// Static light definition handed to the renderer verbatim.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDescriptor {
    /// Light category.
    pub kind: LightKind,
    /// World position; `None` for ambient light.
    pub position: Option<Vec3>,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Light colour.
    pub color: Rgba8,
    /// Whether the light renders shadow maps.
    #[serde(default)]
    pub casts_shadow: bool,
    /// Distance at which a point light's contribution reaches zero.
    #[serde(default)]
    pub falloff_distance: Option<f32>,
}

const HERO_LIGHTS: [LightDescriptor; 4] = [
    // Soft fill so nothing is fully black.
    LightDescriptor {
        kind: LightKind::Ambient,
        position: None,
        intensity: 0.6,
        color: Rgba8::WHITE,
        casts_shadow: false,
        falloff_distance: None,
    },
    // Key light.
    LightDescriptor {
        kind: LightKind::Directional,
        position: Some(Vec3::new(5.0, 10.0, 5.0)),
        intensity: 1.5,
        color: Rgba8::WHITE,
        casts_shadow: true,
        falloff_distance: None,
    },
    // Cool fill from the left.
    LightDescriptor {
        kind: LightKind::Directional,
        position: Some(Vec3::new(-3.0, 5.0, 3.0)),
        intensity: 0.8,
        color: Rgba8::opaque(0xe6, 0xf0, 0xff),
        casts_shadow: false,
        falloff_distance: None,
    },
    // Close detail over the desk.
    LightDescriptor {
        kind: LightKind::Point,
        position: Some(Vec3::new(2.0, 4.0, 4.0)),
        intensity: 1.0,
        color: Rgba8::WHITE,
        casts_shadow: false,
        falloff_distance: Some(15.0),
    },
];

/// The hero scene's fixed lighting design.
pub struct LightingRig;

impl LightingRig {
    /// Ambient fill, shadow-casting key, secondary directional fill, point detail light.
    pub fn lights() -> &'static [LightDescriptor] {
        &HERO_LIGHTS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lighting.rs"]
mod tests;
