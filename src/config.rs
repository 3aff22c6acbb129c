use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FolioError, FolioResult};
use crate::motion::ease::Ease;
use crate::motion::viewport::{SMOOTH_SCROLL_MS, Viewport};
use crate::nav::section::NavConfig;
use crate::page::Marquee;
use crate::scene::catalog::normalize_rel_path;
use crate::scene::hero::ScreenContent;
use crate::texture::synth::TextureConfig;

/// Hero section of the configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Asset id handed to the loader, relative to the asset root.
    pub asset_id: String,
    /// Screen content of the workspace.
    pub screens: ScreenContent,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            asset_id: "models/workspace.json".to_string(),
            screens: ScreenContent::default(),
        }
    }
}

/// Viewport and smooth-scroll settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Viewport width in CSS px.
    pub viewport_width: f64,
    /// Viewport height in CSS px.
    pub viewport_height: f64,
    /// Smooth-scroll duration.
    pub smooth_scroll_ms: u64,
    /// Smooth-scroll easing.
    pub smooth_scroll_ease: Ease,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            smooth_scroll_ms: SMOOTH_SCROLL_MS,
            smooth_scroll_ease: Ease::InOutCubic,
        }
    }
}

impl MotionConfig {
    /// Empty viewport with these settings.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
            .with_scroll_timing(self.smooth_scroll_ms, self.smooth_scroll_ease)
    }
}

/// Complete engine configuration. Every section is optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Texture synthesis and caching.
    pub texture: TextureConfig,
    /// Hero asset and screens.
    pub hero: HeroConfig,
    /// Viewport and smooth scroll.
    pub motion: MotionConfig,
    /// Navigation bar.
    pub nav: NavConfig,
    /// Logo marquee.
    pub marquee: Marquee,
}

impl FolioConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        serde_json::from_str(s).map_err(|e| FolioError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse config JSON: {e}")))
    }

    /// Load and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> FolioResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FolioError::serde(e.to_string()))
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> FolioResult<()> {
        let size = self.texture.size;
        if size.width == 0 || size.height == 0 {
            return Err(FolioError::config("texture size must be non-zero"));
        }
        if size.width > u32::from(u16::MAX) || size.height > u32::from(u16::MAX) {
            return Err(FolioError::config("texture size must fit in u16"));
        }
        if self.texture.cache_capacity == 0 {
            return Err(FolioError::config("texture cache_capacity must be > 0"));
        }
        normalize_rel_path(&self.hero.asset_id)
            .map_err(|e| FolioError::config(format!("hero.asset_id: {e}")))?;
        let m = &self.motion;
        if !(m.viewport_width > 0.0 && m.viewport_height > 0.0) {
            return Err(FolioError::config("viewport size must be positive"));
        }
        self.nav
            .validate()
            .map_err(|e| FolioError::config(format!("nav: {e}")))?;
        self.marquee
            .validate()
            .map_err(|e| FolioError::config(format!("marquee: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
