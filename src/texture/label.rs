use vello_cpu::kurbo::Rect;

use crate::foundation::core::Rgba8;
use crate::foundation::error::FolioResult;
use crate::texture::descriptor::ContentDescriptor;
use crate::texture::draw::fill_rect;
use crate::texture::text::TextPainter;

/// Background used when the descriptor omits one.
pub const DEFAULT_BACKGROUND: &str = "#1a1a2e";
/// Foreground used when the descriptor omits one.
pub const DEFAULT_FOREGROUND: &str = "#00d4ff";

/// Font size on a 256px surface; scaled with the smaller surface side.
const FONT_PX_AT_256: f64 = 32.0;

pub(crate) fn paint(
    ctx: &mut vello_cpu::RenderContext,
    text: &mut TextPainter,
    desc: &ContentDescriptor,
    width: f64,
    height: f64,
) -> FolioResult<()> {
    let bg = Rgba8::from_hex(desc.param_or("background", DEFAULT_BACKGROUND))?;
    let fg = Rgba8::from_hex(desc.param_or("foreground", DEFAULT_FOREGROUND))?;
    fill_rect(ctx, Rect::new(0.0, 0.0, width, height), bg);

    let label = desc.param_or("text", "");
    let size = (FONT_PX_AT_256 * width.min(height) / 256.0) as f32;
    let w = text.measure(label, size);
    let x = (width - w) / 2.0;
    let top = (height - f64::from(size) * 1.2) / 2.0;
    text.draw(ctx, label, x, top, size, fg);
    Ok(())
}
