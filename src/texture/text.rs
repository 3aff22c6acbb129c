use vello_cpu::kurbo::{Affine, Rect};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FolioError, FolioResult};

/// Horizontal advance of a glyph block, as a fraction of the font size.
const BLOCK_ADVANCE: f64 = 0.6;
const BLOCK_WIDTH: f64 = 0.5;
const BLOCK_TOP: f64 = 0.3;
const BLOCK_BOTTOM: f64 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Draws single lines of text onto a `vello_cpu` context.
///
/// With a font, text is shaped by Parley and emitted as glyph runs. Without one, each visible
/// character becomes a solid block so output never depends on the host's installed fonts.
pub(crate) enum TextPainter {
    Blocks,
    Glyphs(Box<GlyphFace>),
}

pub(crate) struct GlyphFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl TextPainter {
    /// Block-glyph painter.
    pub(crate) fn blocks() -> Self {
        Self::Blocks
    }

    /// Glyph painter backed by the given font file bytes.
    pub(crate) fn from_font_bytes(font_bytes: Vec<u8>) -> FolioResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            FolioError::validation("no font families registered from font bytes")
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FolioError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self::Glyphs(Box::new(GlyphFace {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font,
        })))
    }

    /// Width of `text` at `size_px`.
    pub(crate) fn measure(&mut self, text: &str, size_px: f32) -> f64 {
        match self {
            Self::Blocks => text.chars().count() as f64 * f64::from(size_px) * BLOCK_ADVANCE,
            Self::Glyphs(face) => f64::from(face.layout(text, size_px).width()),
        }
    }

    /// Draw `text` with its top-left corner at `(x, top)`.
    pub(crate) fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f64,
        top: f64,
        size_px: f32,
        color: Rgba8,
    ) {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        let size = f64::from(size_px);
        match self {
            Self::Blocks => {
                ctx.set_transform(Affine::IDENTITY);
                for (i, ch) in text.chars().enumerate() {
                    if ch.is_whitespace() {
                        continue;
                    }
                    let x0 = x + i as f64 * size * BLOCK_ADVANCE;
                    ctx.fill_rect(&Rect::new(
                        x0,
                        top + size * BLOCK_TOP,
                        x0 + size * BLOCK_WIDTH,
                        top + size * BLOCK_BOTTOM,
                    ));
                }
            }
            Self::Glyphs(face) => {
                let layout = face.layout(text, size_px);
                ctx.set_transform(Affine::translate((x, top)));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&face.font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                ctx.set_transform(Affine::IDENTITY);
            }
        }
    }
}

impl GlyphFace {
    fn layout(&mut self, text: &str, size_px: f32) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            Rgba8::WHITE,
        )));
        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/text.rs"]
mod tests;
