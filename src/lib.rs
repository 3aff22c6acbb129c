//! Folio is the visual composition engine behind a single-page 3D portfolio.
//!
//! It covers three concerns:
//!
//! - procedural screen textures ([`TextureSynthesizer`], [`TextureCache`]) drawn onto a static
//!   desk asset,
//! - scene assembly ([`SceneAssembler`], [`HeroScene`]) binding the asset's mesh catalog to
//!   generated materials while tolerating missing optional parts,
//! - scroll-driven entrance animation ([`AnimationOrchestrator`]) and navigation
//!   ([`ScrollNavController`]) against a viewport model ([`Viewport`]).
//!
//! Everything is single-threaded and driven by an explicit logical clock ([`TimeMs`]).
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod foundation;
mod motion;
mod nav;
mod scene;
mod texture;

/// Fixed page content: hero headline, showcase grid, logo marquee.
pub mod page;

pub use crate::config::{FolioConfig, HeroConfig, MotionConfig};
pub use crate::foundation::core::{Mat4, Point, Quat, Rect, Rgba8, TimeMs, Transform3, Vec3};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::foundation::hash::Fingerprint;

pub use crate::texture::bitmap::Bitmap;
pub use crate::texture::cache::{CACHE_CAPACITY_ENV, TextureCache, TextureCacheStats};
pub use crate::texture::code::{TokenClass, classify_line};
pub use crate::texture::descriptor::{ContentDescriptor, ContentKind};
pub use crate::texture::synth::{TextureConfig, TextureSize, TextureSynthesizer};

pub use crate::scene::assembler::{
    DrawInstruction, GeneratedMaterial, InMemoryMaterials, MaterialBackend, MaterialBinding,
    MaterialHandle, MaterialOverride, SceneAssembler, SceneDescription,
};
pub use crate::scene::catalog::{
    AssetLoader, GeometryRef, LoadedAsset, ManifestLoader, MaterialRef, MeshCatalog,
    MeshCatalogEntry, MeshPlacement, normalize_rel_path,
};
pub use crate::scene::hero::{
    HeroScene, LEFT_MONITOR_SCREEN, RIGHT_MONITOR_SCREEN, ScreenContent, TABLET_FALLBACK,
    TABLET_SCREEN, screen_overrides, workspace_layout,
};
pub use crate::scene::lighting::{LightDescriptor, LightKind, LightingRig};

pub use crate::motion::ease::Ease;
pub use crate::motion::orchestrator::{
    AnimationEvent, AnimationGroup, AnimationOrchestrator, AnimationState, AnimationTarget,
};
pub use crate::motion::tween::{Lerp, Tween, VisualState};
pub use crate::motion::viewport::{
    Crossing, DocumentGeometry, IntersectionObserver, SMOOTH_SCROLL_MS, SmoothScroller,
    Subscription, Trigger, Viewport,
};

pub use crate::nav::controller::{ClickOutcome, ScrollNavController};
pub use crate::nav::section::{NavConfig, NavEntry, NavSection, default_entries};
