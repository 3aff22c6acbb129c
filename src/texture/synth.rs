use std::path::PathBuf;

use crate::foundation::error::{FolioError, FolioResult};
use crate::texture::bitmap::Bitmap;
use crate::texture::descriptor::{ContentDescriptor, ContentKind};
use crate::texture::text::TextPainter;
use crate::texture::{code, label, profile};

/// Dimensions of generated screen textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextureSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for TextureSize {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

/// Texture section of the configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Output size of every synthesized bitmap.
    pub size: TextureSize,
    /// Optional font file; when absent text is drawn as glyph blocks.
    pub font_path: Option<PathBuf>,
    /// Maximum number of memoized bitmaps.
    pub cache_capacity: usize,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            size: TextureSize::default(),
            font_path: None,
            cache_capacity: 32,
        }
    }
}

/// Turns content descriptors into bitmaps.
///
/// Output depends only on the descriptor and the synthesizer's fixed size/font. The
/// `vello_cpu` render context is internal scratch state reused between calls.
pub struct TextureSynthesizer {
    size: TextureSize,
    text: TextPainter,
    ctx: Option<vello_cpu::RenderContext>,
}

impl TextureSynthesizer {
    /// Synthesizer drawing text as glyph blocks.
    pub fn new(size: TextureSize) -> Self {
        Self {
            size,
            text: TextPainter::blocks(),
            ctx: None,
        }
    }

    /// Synthesizer shaping text with the given font file bytes.
    pub fn with_font(size: TextureSize, font_bytes: Vec<u8>) -> FolioResult<Self> {
        Ok(Self {
            size,
            text: TextPainter::from_font_bytes(font_bytes)?,
            ctx: None,
        })
    }

    /// Build from configuration, reading the font file if one is configured.
    pub fn from_config(cfg: &TextureConfig) -> FolioResult<Self> {
        match &cfg.font_path {
            None => Ok(Self::new(cfg.size)),
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    FolioError::config(format!("failed to read font '{}': {e}", path.display()))
                })?;
                Self::with_font(cfg.size, bytes)
            }
        }
    }

    /// Configured output size.
    pub fn size(&self) -> TextureSize {
        self.size
    }

    /// Render `descriptor` into a new bitmap.
    ///
    /// Fails with [`FolioError::Texture`] when the drawing surface cannot be created.
    #[tracing::instrument(skip_all, fields(kind = descriptor.kind.as_str()))]
    pub fn synthesize(&mut self, descriptor: &ContentDescriptor) -> FolioResult<Bitmap> {
        let (w, h) = self.surface_dims()?;
        self.with_ctx_mut(w, h, |this, ctx| {
            let (fw, fh) = (f64::from(w), f64::from(h));
            match descriptor.kind {
                ContentKind::Code => code::paint(ctx, &mut this.text, descriptor, fw, fh),
                ContentKind::Profile => profile::paint(ctx, &mut this.text, descriptor, fw, fh),
                ContentKind::Label => label::paint(ctx, &mut this.text, descriptor, fw, fh),
            }?;
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            Bitmap::from_premul(
                u32::from(w),
                u32::from(h),
                pixmap.data_as_u8_slice().to_vec(),
            )
        })
    }

    fn surface_dims(&self) -> FolioResult<(u16, u16)> {
        let TextureSize { width, height } = self.size;
        if width == 0 || height == 0 {
            return Err(FolioError::texture(format!(
                "cannot create a {width}x{height} drawing surface"
            )));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| FolioError::texture("drawing surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| FolioError::texture("drawing surface height exceeds u16"))?;
        Ok((w, h))
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> FolioResult<R>,
    ) -> FolioResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx);
        self.ctx = Some(ctx);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/synth.rs"]
mod tests;
