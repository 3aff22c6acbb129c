use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::foundation::core::Transform3;
use crate::foundation::error::{FolioError, FolioResult};

/// Opaque reference to a geometry inside the loaded asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GeometryRef(pub String);

/// Opaque reference to a material inside the loaded asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(pub String);

/// What the external asset loader hands back: named geometries and materials.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadedAsset {
    /// Node name -> geometry.
    #[serde(default)]
    pub nodes: BTreeMap<String, GeometryRef>,
    /// Material name -> material.
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialRef>,
}

/// External 3D asset loader.
///
/// Called once per mount, before the first assembly. Any failure is reported as
/// [`FolioError::SceneUnavailable`].
pub trait AssetLoader {
    /// Load the asset identified by `asset_id`.
    fn load(&self, asset_id: &str) -> FolioResult<LoadedAsset>;
}

/// Loads asset manifests (`{"nodes": {...}, "materials": {...}}` JSON) relative to a root
/// directory.
#[derive(Clone, Debug)]
pub struct ManifestLoader {
    root: PathBuf,
}

impl ManifestLoader {
    /// Loader resolving asset ids under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for ManifestLoader {
    fn load(&self, asset_id: &str) -> FolioResult<LoadedAsset> {
        let rel = normalize_rel_path(asset_id)?;
        let path = self.root.join(Path::new(&rel));
        let bytes = std::fs::read(&path).map_err(|e| {
            FolioError::scene_unavailable(format!("failed to read asset '{}': {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            FolioError::scene_unavailable(format!("invalid asset manifest '{}': {e}", path.display()))
        })
    }
}

/// Normalize and validate root-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> FolioResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FolioError::validation("asset paths must be relative"));
    }
    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FolioError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }
    if out.is_empty() {
        return Err(FolioError::validation("asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

/// Static placement of one mesh of the hero asset: which node, which default material, where.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPlacement {
    /// Node name in the asset.
    pub node: &'static str,
    /// Default material name in the asset.
    pub material: &'static str,
    /// Fixed transform.
    pub transform: Transform3,
    /// May be absent from an asset revision without any diagnostic.
    pub optional: bool,
}

impl MeshPlacement {
    /// Required placement at the identity transform.
    pub const fn new(node: &'static str, material: &'static str) -> Self {
        Self {
            node,
            material,
            transform: Transform3::IDENTITY,
            optional: false,
        }
    }

    /// Replace the transform.
    pub const fn with_transform(mut self, transform: Transform3) -> Self {
        self.transform = transform;
        self
    }

    /// Mark as optional.
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One renderable mesh with its default material and static transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshCatalogEntry {
    /// Unique mesh name.
    pub name: String,
    /// Geometry reference.
    pub geometry: GeometryRef,
    /// Material used unless an override binds a generated one.
    pub default_material: MaterialRef,
    /// Fixed transform, passed through to the draw list.
    #[serde(default)]
    pub transform: Transform3,
    /// Optional parts may be missing without diagnostics.
    #[serde(default)]
    pub optional: bool,
}

/// Read-only, name-keyed mesh catalog in draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshCatalog {
    entries: Vec<MeshCatalogEntry>,
    index: HashMap<String, usize>,
}

impl MeshCatalog {
    /// Catalog from entries; duplicate names are rejected.
    pub fn new(entries: Vec<MeshCatalogEntry>) -> FolioResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if index.insert(e.name.clone(), i).is_some() {
                return Err(FolioError::validation(format!(
                    "duplicate mesh name '{}' in catalog",
                    e.name
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// Bind `layout` to what the loaded asset actually contains.
    ///
    /// Placements whose node or material is missing are skipped: silently when optional, with a
    /// debug trace otherwise.
    pub fn resolve(layout: &[MeshPlacement], asset: &LoadedAsset) -> Self {
        let mut entries = Vec::with_capacity(layout.len());
        let mut index = HashMap::with_capacity(layout.len());
        for p in layout {
            let geometry = asset.nodes.get(p.node);
            let material = asset.materials.get(p.material);
            let (Some(geometry), Some(material)) = (geometry, material) else {
                if !p.optional {
                    tracing::debug!(
                        node = p.node,
                        material = p.material,
                        has_node = geometry.is_some(),
                        "skipping placement missing from asset"
                    );
                }
                continue;
            };
            if index.contains_key(p.node) {
                continue;
            }
            index.insert(p.node.to_string(), entries.len());
            entries.push(MeshCatalogEntry {
                name: p.node.to_string(),
                geometry: geometry.clone(),
                default_material: material.clone(),
                transform: p.transform,
                optional: p.optional,
            });
        }
        Self { entries, index }
    }

    /// Entry by name.
    pub fn get(&self, name: &str) -> Option<&MeshCatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Return `true` when a mesh named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in draw order.
    pub fn entries(&self) -> &[MeshCatalogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
