use smallvec::SmallVec;
use vello_cpu::kurbo::Rect;

use crate::foundation::core::Rgba8;
use crate::foundation::error::FolioResult;
use crate::texture::descriptor::ContentDescriptor;
use crate::texture::draw::{fill_circle, fill_rect, fill_rounded};
use crate::texture::text::TextPainter;

const PAGE_BG: Rgba8 = Rgba8::opaque(0x0f, 0x17, 0x2a);
const CARD_BG: Rgba8 = Rgba8::opaque(0x1e, 0x29, 0x3b);
const BAND_BG: Rgba8 = Rgba8::opaque(0x3b, 0x82, 0xf6);
const AVATAR_FILL: Rgba8 = Rgba8::opaque(0x94, 0xa3, 0xb8);
const NAME_FG: Rgba8 = Rgba8::opaque(0xf8, 0xfa, 0xfc);
const MUTED_FG: Rgba8 = Rgba8::opaque(0x94, 0xa3, 0xb8);
const ENTRY_FG: Rgba8 = Rgba8::opaque(0xe2, 0xe8, 0xf0);
const BULLET: Rgba8 = Rgba8::opaque(0x38, 0xbd, 0xf8);
const DIVIDER: Rgba8 = Rgba8::opaque(0x33, 0x41, 0x55);
const STATUS_ONLINE: Rgba8 = Rgba8::opaque(0x4a, 0xde, 0x80);

const CARD_INSET: f64 = 24.0;
const CARD_RADIUS: f64 = 18.0;
const BAND_FRACTION: f64 = 0.28;
const AVATAR_RADIUS: f64 = 44.0;
const ENTRY_ROW: f64 = 30.0;
const FOOTER_HEIGHT: f64 = 70.0;
const MAX_STATUS_LINES: usize = 2;

/// Paint the profile card.
pub(crate) fn paint(
    ctx: &mut vello_cpu::RenderContext,
    text: &mut TextPainter,
    desc: &ContentDescriptor,
    width: f64,
    height: f64,
) -> FolioResult<()> {
    fill_rect(ctx, Rect::new(0.0, 0.0, width, height), PAGE_BG);

    let card = Rect::new(
        CARD_INSET,
        CARD_INSET,
        (width - CARD_INSET).max(CARD_INSET),
        (height - CARD_INSET).max(CARD_INSET),
    );
    fill_rounded(ctx, card, CARD_RADIUS, CARD_BG);

    let band_bottom = card.y0 + card.height() * BAND_FRACTION;
    fill_rounded(
        ctx,
        Rect::new(card.x0, card.y0, card.x1, band_bottom),
        CARD_RADIUS,
        BAND_BG,
    );
    // Square off the band's lower corners.
    fill_rect(
        ctx,
        Rect::new(card.x0, band_bottom - CARD_RADIUS, card.x1, band_bottom),
        BAND_BG,
    );

    let avatar_center = (card.x0 + 24.0 + AVATAR_RADIUS, band_bottom);
    fill_circle(ctx, avatar_center, AVATAR_RADIUS + 4.0, CARD_BG);
    fill_circle(ctx, avatar_center, AVATAR_RADIUS, AVATAR_FILL);

    let name_x = avatar_center.0 + AVATAR_RADIUS + 16.0;
    text.draw(ctx, desc.param_or("name", ""), name_x, band_bottom + 6.0, 24.0, NAME_FG);
    text.draw(
        ctx,
        desc.param_or("handle", ""),
        name_x,
        band_bottom + 36.0,
        16.0,
        MUTED_FG,
    );

    let footer_top = card.y1 - FOOTER_HEIGHT;
    let entries_x = card.x0 + 28.0;
    let mut row_top = band_bottom + AVATAR_RADIUS + 28.0;
    for entry in desc.lines("entries") {
        if row_top + ENTRY_ROW > footer_top {
            break;
        }
        fill_circle(ctx, (entries_x, row_top + 12.0), 4.0, BULLET);
        text.draw(ctx, entry, entries_x + 16.0, row_top, 16.0, ENTRY_FG);
        row_top += ENTRY_ROW;
    }

    fill_rect(
        ctx,
        Rect::new(card.x0 + 20.0, footer_top, card.x1 - 20.0, footer_top + 1.0),
        DIVIDER,
    );
    let status: SmallVec<[&str; MAX_STATUS_LINES]> = desc
        .lines("status")
        .into_iter()
        .take(MAX_STATUS_LINES)
        .collect();
    for (i, line) in status.iter().enumerate() {
        let top = footer_top + 12.0 + i as f64 * 24.0;
        let color = if i == 0 { STATUS_ONLINE } else { MUTED_FG };
        if i == 0 {
            fill_circle(ctx, (entries_x, top + 10.0), 5.0, STATUS_ONLINE);
        }
        text.draw(ctx, line, entries_x + 16.0, top, 14.0, color);
    }
    Ok(())
}
