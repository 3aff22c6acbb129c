use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::foundation::core::{Transform3, Vec3};
use crate::foundation::error::{FolioError, FolioResult};
use crate::scene::assembler::{MaterialBackend, MaterialOverride, SceneAssembler, SceneDescription};
use crate::scene::catalog::{AssetLoader, MeshCatalog, MeshPlacement};
use crate::scene::lighting::LightingRig;
use crate::texture::cache::TextureCache;
use crate::texture::descriptor::ContentDescriptor;

/// Left monitor screen mesh.
pub const LEFT_MONITOR_SCREEN: &str = "LeftMonitor_Screen_0";
/// Right monitor screen mesh.
pub const RIGHT_MONITOR_SCREEN: &str = "RightMonitor_Screen_0";
/// Tablet screen mesh; absent from some asset revisions.
pub const TABLET_SCREEN: &str = "Tablet_Screen_0";
/// Tablet surface used for the tablet texture when [`TABLET_SCREEN`] is absent.
pub const TABLET_FALLBACK: &str = "Tablet_Mat_0";

const SPEAKER_LEFT: Transform3 = Transform3::at(Vec3::new(3.263, 0.076, -2.193))
    .rotated(Vec3::new(0.0, 0.187, 0.0))
    .scaled_uniform(0.531);
const SPEAKER_RIGHT: Transform3 = Transform3::at(Vec3::new(0.519, 0.0, 0.53));
const KEYBOARD: Transform3 = Transform3::at(Vec3::new(-0.994, -0.578, 0.763))
    .rotated(Vec3::new(-0.04, 0.27, 0.012))
    .scaled_uniform(0.694);
const MOUSE: Transform3 = Transform3::at(Vec3::new(3.343, 4.23, 0.43)).scaled_uniform(0.115);

const WORKSPACE_LAYOUT: &[MeshPlacement] = &[
    MeshPlacement::new("SpeakerLeft_Plastic_0", "Plastic").with_transform(SPEAKER_LEFT),
    MeshPlacement::new("SpeakerLeft_lambert1_0", "lambert1").with_transform(SPEAKER_LEFT),
    MeshPlacement::new("SpeakerRight_Plastic_0", "Plastic").with_transform(SPEAKER_RIGHT),
    MeshPlacement::new("SpeakerRight_lambert1_0", "lambert1").with_transform(SPEAKER_RIGHT),
    MeshPlacement::new("Keyboard_Plastic_0", "Plastic").with_transform(KEYBOARD),
    MeshPlacement::new("Keyboard_Mouse1_0", "Mouse1").with_transform(KEYBOARD),
    MeshPlacement::new("Mouse_Plastic_0", "Plastic").with_transform(MOUSE),
    MeshPlacement::new("Mouse_Mouse1_0", "Mouse1").with_transform(MOUSE),
    MeshPlacement::new("Table1_Table_0", "Table"),
    MeshPlacement::new("Table2_Castors_0", "Castors"),
    MeshPlacement::new("Table2_Table_0", "Table"),
    MeshPlacement::new("Table2_Handle_0", "Handle"),
    MeshPlacement::new("Mat1_Mat_0", "material"),
    MeshPlacement::new("Mat1_Plastic_0", "Plastic"),
    MeshPlacement::new("Pen_Plastic_0", "Plastic"),
    MeshPlacement::new("Computer_Plastic_0", "Plastic"),
    MeshPlacement::new("Computer_Comp2_0", "Comp2"),
    MeshPlacement::new("LeftMonitor_Plastic_0", "Plastic"),
    MeshPlacement::new(LEFT_MONITOR_SCREEN, "Screen"),
    MeshPlacement::new("RightMonitor_Plastic_0", "Plastic"),
    MeshPlacement::new(RIGHT_MONITOR_SCREEN, "Screen"),
    MeshPlacement::new("Tablet_Castors_0", "Castors"),
    MeshPlacement::new(TABLET_FALLBACK, "material"),
    MeshPlacement::new("Tablet_Plastic_0", "Plastic"),
    MeshPlacement::new(TABLET_SCREEN, "Screen").optional(),
    MeshPlacement::new("pCube4_lambert1_0", "lambert1").with_transform(
        Transform3::at(Vec3::new(3.926, 4.363, -2.341)).scaled(Vec3::new(0.093, 0.046, 0.192)),
    ),
    MeshPlacement::new("ElectricExtender_lambert1_0", "lambert1"),
    MeshPlacement::new("SpeakersCable_Cable_0", "Cable").with_transform(
        Transform3::at(Vec3::new(-1.638, 4.319, -1.46))
            .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .scaled_uniform(0.018),
    ),
    MeshPlacement::new("SecondMonitorCable_Cable_0", "Cable"),
    MeshPlacement::new("MainMonitorCable_Cable_0", "Cable"),
    MeshPlacement::new("MouseCable_Cable_0", "Cable"),
    MeshPlacement::new("pCube5_Wood_0", "Wood").with_transform(
        Transform3::at(Vec3::new(0.0, -0.111, 0.0)).scaled(Vec3::new(22.353, 0.175, 14.32)),
    ),
];

/// Fixed placement table of the desk asset.
pub fn workspace_layout() -> &'static [MeshPlacement] {
    WORKSPACE_LAYOUT
}

/// Content shown on the three screens of the workspace.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScreenContent {
    /// Code panel on the left monitor.
    pub left_monitor: ContentDescriptor,
    /// Profile card on the right monitor.
    pub right_monitor: ContentDescriptor,
    /// Label on the tablet.
    pub tablet: ContentDescriptor,
}

impl Default for ScreenContent {
    fn default() -> Self {
        Self {
            left_monitor: ContentDescriptor::code(
                "portfolio.tsx",
                &[
                    "import { Canvas } from '@react-three/fiber';",
                    "import { OrbitControls } from '@react-three/drei';",
                    "",
                    "const Developer = {",
                    "  name: 'Your Name',",
                    "  role: 'Full Stack Developer',",
                    "  stack: ['React', 'Three.js', 'Rust'],",
                    "};",
                    "",
                    "export default function Hero() {",
                    "  return <Canvas camera={{ fov: 45 }} />;",
                    "}",
                ],
            ),
            right_monitor: ContentDescriptor::profile(
                "YOUR NAME",
                "@portfolio",
                &["Projects  12", "Commits   1.2k", "Stars     340"],
                &["Open to work", "Available for freelance"],
            ),
            tablet: ContentDescriptor::label("DEVELOPER", "#1a0a1a", "#ff6b6b"),
        }
    }
}

/// Material overrides for the three screens, textures fetched through `cache`.
///
/// A texture that fails to synthesize becomes `None`, which keeps that screen on its default
/// material.
pub fn screen_overrides(screens: &ScreenContent, cache: &mut TextureCache) -> Vec<MaterialOverride> {
    vec![
        MaterialOverride::new(LEFT_MONITOR_SCREEN, cache.get(&screens.left_monitor)),
        MaterialOverride::new(RIGHT_MONITOR_SCREEN, cache.get(&screens.right_monitor)),
        MaterialOverride::new(TABLET_SCREEN, cache.get(&screens.tablet))
            .with_fallback(TABLET_FALLBACK),
    ]
}

/// The mounted hero: resolved catalog, current screens and the assembled scene.
pub struct HeroScene<B: MaterialBackend> {
    catalog: MeshCatalog,
    screens: ScreenContent,
    assembler: SceneAssembler<B>,
    scene: Arc<SceneDescription>,
}

impl<B: MaterialBackend> HeroScene<B> {
    /// Load the asset once, bind `layout` against it and assemble the first scene.
    ///
    /// Loader failures are returned as [`FolioError::SceneUnavailable`]; the page omits the hero.
    #[tracing::instrument(skip(loader, layout, screens, cache, backend))]
    pub fn mount(
        loader: &dyn AssetLoader,
        asset_id: &str,
        layout: &[MeshPlacement],
        screens: ScreenContent,
        cache: &mut TextureCache,
        backend: B,
    ) -> FolioResult<Self> {
        let asset = loader.load(asset_id).map_err(|err| match err {
            FolioError::SceneUnavailable(_) => err,
            other => FolioError::scene_unavailable(other.to_string()),
        })?;
        let catalog = MeshCatalog::resolve(layout, &asset);
        tracing::debug!(meshes = catalog.len(), "hero catalog resolved");

        let mut assembler = SceneAssembler::new(backend);
        let overrides = screen_overrides(&screens, cache);
        let scene = assembler.assemble(&catalog, &overrides, LightingRig::lights());
        Ok(Self {
            catalog,
            screens,
            assembler,
            scene,
        })
    }

    /// Replace the screen content and reassemble.
    pub fn set_screens(&mut self, screens: ScreenContent, cache: &mut TextureCache) {
        let overrides = screen_overrides(&screens, cache);
        self.scene = self
            .assembler
            .assemble(&self.catalog, &overrides, LightingRig::lights());
        self.screens = screens;
    }

    /// Current scene description.
    pub fn scene(&self) -> &Arc<SceneDescription> {
        &self.scene
    }

    /// Resolved mesh catalog.
    pub fn catalog(&self) -> &MeshCatalog {
        &self.catalog
    }

    /// Current screen content.
    pub fn screens(&self) -> &ScreenContent {
        &self.screens
    }

    /// Material backend.
    pub fn backend(&self) -> &B {
        self.assembler.backend()
    }

    /// Release generated materials and clear the scene. Dropping the hero does the same.
    pub fn unmount(&mut self) {
        self.assembler.dispose();
        self.scene = Arc::new(SceneDescription::default());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero.rs"]
mod tests;
