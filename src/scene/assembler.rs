use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::foundation::core::{Rgba8, Transform3};
use crate::foundation::error::FolioResult;
use crate::foundation::hash::{Fingerprint, StableHasher};
use crate::scene::catalog::{GeometryRef, MaterialRef, MeshCatalog};
use crate::scene::lighting::{LightDescriptor, LightKind};
use crate::texture::bitmap::Bitmap;

/// Declared binding from a mesh name to a generated texture, applied opportunistically.
#[derive(Clone, Debug)]
pub struct MaterialOverride {
    /// Preferred mesh.
    pub target_mesh: String,
    /// Mesh used when `target_mesh` is absent from the catalog.
    pub fallback_mesh: Option<String>,
    /// Generated texture; `None` keeps the mesh on its default material.
    pub texture: Option<Arc<Bitmap>>,
}

impl MaterialOverride {
    /// Override targeting a single mesh.
    pub fn new(target_mesh: impl Into<String>, texture: Option<Arc<Bitmap>>) -> Self {
        Self {
            target_mesh: target_mesh.into(),
            fallback_mesh: None,
            texture,
        }
    }

    /// Add a fallback mesh name.
    pub fn with_fallback(mut self, mesh: impl Into<String>) -> Self {
        self.fallback_mesh = Some(mesh.into());
        self
    }

    /// Mesh this override binds to in `catalog`, if any.
    pub fn resolve<'a>(&'a self, catalog: &MeshCatalog) -> Option<&'a str> {
        if catalog.contains(&self.target_mesh) {
            return Some(&self.target_mesh);
        }
        self.fallback_mesh
            .as_deref()
            .filter(|name| catalog.contains(name))
    }
}

/// Handle to a material resource owned by a [`MaterialBackend`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MaterialHandle(pub u64);

/// Allocator for texture-backed materials (GPU resources in a real renderer).
pub trait MaterialBackend {
    /// Create an unlit material sampling `texture`.
    fn create(&mut self, texture: &Arc<Bitmap>) -> FolioResult<MaterialHandle>;
    /// Release a material previously returned by `create`.
    fn release(&mut self, handle: MaterialHandle);
}

/// Material backend that only tracks handles. Used by tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryMaterials {
    next: u64,
    live: BTreeMap<MaterialHandle, u64>,
    created: u64,
    released: u64,
}

impl InMemoryMaterials {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles created and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total `create` calls.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Total `release` calls for live handles.
    pub fn released(&self) -> u64 {
        self.released
    }

    /// Return `true` when `handle` is live.
    pub fn is_live(&self, handle: MaterialHandle) -> bool {
        self.live.contains_key(&handle)
    }
}

impl MaterialBackend for InMemoryMaterials {
    fn create(&mut self, texture: &Arc<Bitmap>) -> FolioResult<MaterialHandle> {
        self.next += 1;
        self.created += 1;
        let handle = MaterialHandle(self.next);
        self.live.insert(handle, texture.content_hash());
        Ok(handle)
    }

    fn release(&mut self, handle: MaterialHandle) {
        if self.live.remove(&handle).is_some() {
            self.released += 1;
        }
    }
}

/// Material bound to a draw instruction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "source", content = "id", rename_all = "snake_case")]
pub enum MaterialBinding {
    /// The mesh's own material from the asset.
    Catalog(MaterialRef),
    /// A material generated from a synthesized texture.
    Generated(MaterialHandle),
}

/// One mesh to draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawInstruction {
    /// Catalog mesh name.
    pub mesh: String,
    /// Geometry reference.
    pub geometry: GeometryRef,
    /// Bound material.
    pub material: MaterialBinding,
    /// Static transform, passed through from the catalog.
    pub transform: Transform3,
}

/// Texture-backed unlit material.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GeneratedMaterial {
    /// Backend handle.
    pub handle: MaterialHandle,
    /// Texture sampled by the material.
    #[serde(skip)]
    pub texture: Arc<Bitmap>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Content hash of the texture.
    pub texture_hash: u64,
    /// Multiplied with the texture; white leaves it unchanged.
    pub tint: Rgba8,
}

/// Everything the renderer needs for one frame: draw list, generated materials, lights.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct SceneDescription {
    /// Draw list in catalog order.
    pub draws: Vec<DrawInstruction>,
    /// Materials referenced by `MaterialBinding::Generated`.
    pub materials: Vec<GeneratedMaterial>,
    /// Lights, appended verbatim.
    pub lights: Vec<LightDescriptor>,
}

impl SceneDescription {
    /// Draw instruction for `mesh`.
    pub fn draw(&self, mesh: &str) -> Option<&DrawInstruction> {
        self.draws.iter().find(|d| d.mesh == mesh)
    }

    /// Generated material by handle.
    pub fn material(&self, handle: MaterialHandle) -> Option<&GeneratedMaterial> {
        self.materials.iter().find(|m| m.handle == handle)
    }

    /// Texture bound to `mesh`, if it uses a generated material.
    pub fn texture_for(&self, mesh: &str) -> Option<&Arc<Bitmap>> {
        match &self.draw(mesh)?.material {
            MaterialBinding::Generated(h) => self.material(*h).map(|m| &m.texture),
            MaterialBinding::Catalog(_) => None,
        }
    }
}

/// Binds catalog meshes to default or generated materials and merges lights.
///
/// Holds no frame-loop state. Generated materials are keyed by texture content: a reassembly
/// reuses materials that are still referenced and releases the rest, and
/// [`dispose`](Self::dispose) (or drop) releases everything it created.
pub struct SceneAssembler<B: MaterialBackend> {
    backend: B,
    bound: HashMap<u64, MaterialHandle>,
    memo: Option<(Fingerprint, Arc<SceneDescription>)>,
}

impl<B: MaterialBackend> SceneAssembler<B> {
    /// Assembler allocating materials from `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bound: HashMap::new(),
            memo: None,
        }
    }

    /// Material backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of generated materials currently held.
    pub fn bound_materials(&self) -> usize {
        self.bound.len()
    }

    /// Build the scene description.
    ///
    /// Overrides resolve to their target mesh, else their fallback mesh, else are dropped.
    /// Identical inputs return the previous description without touching the backend.
    #[tracing::instrument(skip_all, fields(meshes = catalog.len(), overrides = overrides.len()))]
    pub fn assemble(
        &mut self,
        catalog: &MeshCatalog,
        overrides: &[MaterialOverride],
        lights: &[LightDescriptor],
    ) -> Arc<SceneDescription> {
        let key = inputs_fingerprint(catalog, overrides, lights);
        if let Some((memo_key, scene)) = &self.memo {
            if *memo_key == key {
                return scene.clone();
            }
        }

        let mut textures: HashMap<&str, &Arc<Bitmap>> = HashMap::new();
        for ov in overrides {
            let Some(mesh) = ov.resolve(catalog) else {
                tracing::debug!(target_mesh = %ov.target_mesh, "override target absent; dropped");
                continue;
            };
            match &ov.texture {
                Some(tex) => {
                    textures.insert(mesh, tex);
                }
                None => {
                    tracing::debug!(mesh, "no texture for override; keeping default material");
                }
            }
        }

        let mut next_bound = HashMap::new();
        let mut materials = Vec::new();
        let mut draws = Vec::with_capacity(catalog.len());
        for entry in catalog.entries() {
            let generated = textures
                .get(entry.name.as_str())
                .and_then(|tex| self.bind(tex, &mut next_bound, &mut materials));
            let material = match generated {
                Some(handle) => MaterialBinding::Generated(handle),
                None => MaterialBinding::Catalog(entry.default_material.clone()),
            };
            draws.push(DrawInstruction {
                mesh: entry.name.clone(),
                geometry: entry.geometry.clone(),
                material,
                transform: entry.transform,
            });
        }

        for (hash, handle) in self.bound.drain() {
            if !next_bound.contains_key(&hash) {
                self.backend.release(handle);
            }
        }
        self.bound = next_bound;

        let scene = Arc::new(SceneDescription {
            draws,
            materials,
            lights: lights.to_vec(),
        });
        self.memo = Some((key, scene.clone()));
        scene
    }

    /// Release every generated material and forget the memoized scene.
    pub fn dispose(&mut self) {
        for (_, handle) in self.bound.drain() {
            self.backend.release(handle);
        }
        self.memo = None;
    }

    fn bind(
        &mut self,
        tex: &Arc<Bitmap>,
        next_bound: &mut HashMap<u64, MaterialHandle>,
        materials: &mut Vec<GeneratedMaterial>,
    ) -> Option<MaterialHandle> {
        let hash = tex.content_hash();
        if let Some(handle) = next_bound.get(&hash) {
            return Some(*handle);
        }
        let handle = match self.bound.get(&hash) {
            Some(handle) => *handle,
            None => match self.backend.create(tex) {
                Ok(handle) => handle,
                Err(err) => {
                    tracing::warn!(error = %err, "material creation failed; using default material");
                    return None;
                }
            },
        };
        next_bound.insert(hash, handle);
        materials.push(GeneratedMaterial {
            handle,
            texture: tex.clone(),
            width: tex.width(),
            height: tex.height(),
            texture_hash: hash,
            tint: Rgba8::WHITE,
        });
        Some(handle)
    }
}

impl<B: MaterialBackend> Drop for SceneAssembler<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn inputs_fingerprint(
    catalog: &MeshCatalog,
    overrides: &[MaterialOverride],
    lights: &[LightDescriptor],
) -> Fingerprint {
    let mut h = StableHasher::new();

    h.write_u32(catalog.len() as u32);
    for e in catalog.entries() {
        h.write_str(&e.name);
        h.write_str(&e.geometry.0);
        h.write_str(&e.default_material.0);
        write_transform(&mut h, &e.transform);
        h.write_bool(e.optional);
    }

    h.write_u32(overrides.len() as u32);
    for ov in overrides {
        h.write_str(&ov.target_mesh);
        match &ov.fallback_mesh {
            Some(name) => {
                h.write_u8(1);
                h.write_str(name);
            }
            None => h.write_u8(0),
        }
        match &ov.texture {
            Some(tex) => {
                h.write_u8(1);
                h.write_u64(tex.content_hash());
            }
            None => h.write_u8(0),
        }
    }

    h.write_u32(lights.len() as u32);
    for l in lights {
        h.write_u8(match l.kind {
            LightKind::Ambient => 0,
            LightKind::Directional => 1,
            LightKind::Point => 2,
        });
        match l.position {
            Some(p) => {
                h.write_u8(1);
                for c in p.to_array() {
                    h.write_f32(c);
                }
            }
            None => h.write_u8(0),
        }
        h.write_f32(l.intensity);
        h.write_bytes(&[l.color.r, l.color.g, l.color.b, l.color.a]);
        h.write_bool(l.casts_shadow);
        h.write_f32(l.falloff_distance.unwrap_or(-1.0));
    }

    h.finish()
}

fn write_transform(h: &mut StableHasher, t: &Transform3) {
    for v in [t.position, t.rotation, t.scale] {
        for c in v.to_array() {
            h.write_f32(c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assembler.rs"]
mod tests;
