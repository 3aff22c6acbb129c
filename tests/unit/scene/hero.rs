use std::collections::BTreeMap;

use super::*;
use crate::scene::assembler::{InMemoryMaterials, MaterialBinding};
use crate::scene::catalog::{GeometryRef, LoadedAsset, MaterialRef};
use crate::texture::synth::{TextureSize, TextureSynthesizer};

struct FixedLoader(Option<LoadedAsset>);

impl AssetLoader for FixedLoader {
    fn load(&self, asset_id: &str) -> FolioResult<LoadedAsset> {
        self.0
            .clone()
            .ok_or_else(|| FolioError::validation(format!("no asset '{asset_id}'")))
    }
}

fn full_asset(with_tablet_screen: bool) -> LoadedAsset {
    let mut nodes = BTreeMap::new();
    let mut materials = BTreeMap::new();
    for p in workspace_layout() {
        if p.node == TABLET_SCREEN && !with_tablet_screen {
            continue;
        }
        nodes.insert(p.node.to_string(), GeometryRef(p.node.to_lowercase()));
        materials.insert(p.material.to_string(), MaterialRef(p.material.to_string()));
    }
    LoadedAsset { nodes, materials }
}

fn cache() -> TextureCache {
    let synth = TextureSynthesizer::new(TextureSize {
        width: 64,
        height: 64,
    });
    TextureCache::new(synth, 8)
}

fn mount(asset: LoadedAsset, cache: &mut TextureCache) -> HeroScene<InMemoryMaterials> {
    HeroScene::mount(
        &FixedLoader(Some(asset)),
        "workspace.json",
        workspace_layout(),
        ScreenContent::default(),
        cache,
        InMemoryMaterials::new(),
    )
    .unwrap()
}

fn is_generated(scene: &SceneDescription, mesh: &str) -> bool {
    matches!(
        scene.draw(mesh).map(|d| &d.material),
        Some(MaterialBinding::Generated(_))
    )
}

#[test]
fn layout_names_are_unique_and_screens_present() {
    let mut seen = std::collections::HashSet::new();
    for p in workspace_layout() {
        assert!(seen.insert(p.node), "duplicate node {}", p.node);
    }
    for mesh in [LEFT_MONITOR_SCREEN, RIGHT_MONITOR_SCREEN, TABLET_SCREEN, TABLET_FALLBACK] {
        assert!(seen.contains(mesh));
    }
    let optional: Vec<_> = workspace_layout()
        .iter()
        .filter(|p| p.optional)
        .map(|p| p.node)
        .collect();
    assert_eq!(optional, vec![TABLET_SCREEN]);
}

#[test]
fn mount_binds_all_three_screens() {
    let mut cache = cache();
    let hero = mount(full_asset(true), &mut cache);
    let scene = hero.scene();
    assert_eq!(scene.draws.len(), workspace_layout().len());
    assert!(is_generated(scene, LEFT_MONITOR_SCREEN));
    assert!(is_generated(scene, RIGHT_MONITOR_SCREEN));
    assert!(is_generated(scene, TABLET_SCREEN));
    assert!(!is_generated(scene, TABLET_FALLBACK));
    assert_eq!(scene.lights.len(), LightingRig::lights().len());
    assert_eq!(hero.backend().live_count(), 3);
}

#[test]
fn tablet_texture_falls_back_to_tablet_surface() {
    let mut cache = cache();
    let hero = mount(full_asset(false), &mut cache);
    let scene = hero.scene();
    assert!(scene.draw(TABLET_SCREEN).is_none());
    assert!(is_generated(scene, TABLET_FALLBACK));
}

#[test]
fn mesh_transforms_pass_through() {
    let mut cache = cache();
    let hero = mount(full_asset(true), &mut cache);
    let floor = hero.scene().draw("pCube5_Wood_0").unwrap();
    assert_eq!(floor.transform.position, Vec3::new(0.0, -0.111, 0.0));
    assert_eq!(floor.transform.scale, Vec3::new(22.353, 0.175, 14.32));
    let mouse = hero.scene().draw("Mouse_Mouse1_0").unwrap();
    assert_eq!(mouse.transform.scale, Vec3::splat(0.115));
}

#[test]
fn loader_failure_is_scene_unavailable() {
    let mut cache = cache();
    let res = HeroScene::mount(
        &FixedLoader(None),
        "missing.json",
        workspace_layout(),
        ScreenContent::default(),
        &mut cache,
        InMemoryMaterials::new(),
    );
    assert!(matches!(res, Err(FolioError::SceneUnavailable(_))));
}

#[test]
fn set_screens_reuses_cached_textures_and_releases_replaced_ones() {
    let mut cache = cache();
    let mut hero = mount(full_asset(true), &mut cache);
    let before = hero.scene().texture_for(LEFT_MONITOR_SCREEN).unwrap().clone();

    let mut screens = ScreenContent::default();
    screens.tablet = ContentDescriptor::label("HIRE ME", "#000000", "#ffffff");
    hero.set_screens(screens.clone(), &mut cache);

    let after = hero.scene().texture_for(LEFT_MONITOR_SCREEN).unwrap();
    assert!(Arc::ptr_eq(&before, after));
    assert_eq!(hero.screens(), &screens);
    assert_eq!(hero.backend().live_count(), 3);
    assert_eq!(hero.backend().created(), 4);

    hero.unmount();
    assert_eq!(hero.backend().live_count(), 0);
    assert!(hero.scene().draws.is_empty());
}

#[test]
fn failed_texture_keeps_default_screen_material() {
    let synth = TextureSynthesizer::new(TextureSize {
        width: 0,
        height: 0,
    });
    let mut cache = TextureCache::new(synth, 8);
    let hero = mount(full_asset(true), &mut cache);
    assert_eq!(
        hero.scene().draw(LEFT_MONITOR_SCREEN).unwrap().material,
        MaterialBinding::Catalog(MaterialRef("Screen".into()))
    );
    assert_eq!(hero.backend().created(), 0);
}
