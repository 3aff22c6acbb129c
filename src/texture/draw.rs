use vello_cpu::kurbo::{Affine, Circle, Rect, RoundedRect, Shape};

use crate::foundation::core::Rgba8;

const TOLERANCE: f64 = 0.1;

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_transform(Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

pub(crate) fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, c: Rgba8) {
    set_color(ctx, c);
    ctx.fill_rect(&rect);
}

pub(crate) fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64, c: Rgba8) {
    set_color(ctx, c);
    ctx.fill_path(&RoundedRect::from_rect(rect, radius).to_path(TOLERANCE));
}

pub(crate) fn fill_circle(
    ctx: &mut vello_cpu::RenderContext,
    center: (f64, f64),
    radius: f64,
    c: Rgba8,
) {
    set_color(ctx, c);
    ctx.fill_path(&Circle::new(center, radius).to_path(TOLERANCE));
}
