use vello_cpu::kurbo::Rect;

use crate::foundation::core::Rgba8;
use crate::foundation::error::FolioResult;
use crate::texture::descriptor::ContentDescriptor;
use crate::texture::draw::{fill_circle, fill_rect};
use crate::texture::text::TextPainter;

const PANEL_BG: Rgba8 = Rgba8::opaque(0x1e, 0x1e, 0x2e);
const HEADER_BG: Rgba8 = Rgba8::opaque(0x2a, 0x2a, 0x3c);
const GUTTER_BG: Rgba8 = Rgba8::opaque(0x18, 0x18, 0x25);
const TITLE_FG: Rgba8 = Rgba8::opaque(0x8b, 0x8f, 0xa7);
const LINE_NUMBER_FG: Rgba8 = Rgba8::opaque(0x58, 0x5b, 0x70);
const WINDOW_DOTS: [Rgba8; 3] = [
    Rgba8::opaque(0xff, 0x5f, 0x56),
    Rgba8::opaque(0xff, 0xbd, 0x2e),
    Rgba8::opaque(0x27, 0xc9, 0x3f),
];

const HEADER_HEIGHT: f64 = 36.0;
const GUTTER_WIDTH: f64 = 44.0;
const LINE_HEIGHT: f64 = 24.0;
const FONT_PX: f32 = 16.0;
const GUTTER_FONT_PX: f32 = 12.0;
const TITLE_FONT_PX: f32 = 14.0;
const TEXT_INSET: f64 = 12.0;

const IMPORT_KEYWORDS: &[&str] = &["import", "from", "use", "require", "include"];
const DECLARATION_KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "fn",
    "class",
    "struct",
    "enum",
    "interface",
    "type",
    "def",
    "pub",
    "export",
    "async",
    "impl",
];

/// Colour class assigned to a whole line of sample code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// `import`/`from`-like lines.
    Import,
    /// Lines opening with a declaration keyword.
    Declaration,
    /// Lines opening with a string literal.
    StringLiteral,
    /// Lines opening with any other identifier.
    Identifier,
    /// Punctuation, comments, numbers, blank lines.
    Plain,
}

impl TokenClass {
    /// Preset foreground colour of this class.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Import => Rgba8::opaque(0xc6, 0x78, 0xdd),
            Self::Declaration => Rgba8::opaque(0x61, 0xaf, 0xef),
            Self::StringLiteral => Rgba8::opaque(0x98, 0xc3, 0x79),
            Self::Identifier => Rgba8::opaque(0xe5, 0xc0, 0x7b),
            Self::Plain => Rgba8::opaque(0xab, 0xb2, 0xbf),
        }
    }
}

/// Classify a line by its leading token.
pub fn classify_line(line: &str) -> TokenClass {
    let t = line.trim_start();
    let first = t
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .next()
        .unwrap_or("");

    if IMPORT_KEYWORDS.contains(&first) || (first == "export" && t.contains(" from ")) {
        TokenClass::Import
    } else if DECLARATION_KEYWORDS.contains(&first) {
        TokenClass::Declaration
    } else if t.starts_with(['"', '\'', '`']) {
        TokenClass::StringLiteral
    } else if first
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
    {
        TokenClass::Identifier
    } else {
        TokenClass::Plain
    }
}

/// Paint the editor panel. Lines that do not fit below the header are not drawn.
pub(crate) fn paint(
    ctx: &mut vello_cpu::RenderContext,
    text: &mut TextPainter,
    desc: &ContentDescriptor,
    width: f64,
    height: f64,
) -> FolioResult<()> {
    fill_rect(ctx, Rect::new(0.0, 0.0, width, height), PANEL_BG);
    fill_rect(ctx, Rect::new(0.0, 0.0, width, HEADER_HEIGHT), HEADER_BG);
    for (i, dot) in WINDOW_DOTS.iter().enumerate() {
        fill_circle(ctx, (18.0 + 18.0 * i as f64, HEADER_HEIGHT / 2.0), 6.0, *dot);
    }
    if let Some(title) = desc.param("title") {
        let top = (HEADER_HEIGHT - f64::from(TITLE_FONT_PX) * 1.2) / 2.0;
        text.draw(ctx, title, 76.0, top, TITLE_FONT_PX, TITLE_FG);
    }
    fill_rect(
        ctx,
        Rect::new(0.0, HEADER_HEIGHT, GUTTER_WIDTH, height),
        GUTTER_BG,
    );

    let first_top = HEADER_HEIGHT + TEXT_INSET;
    for (i, line) in desc.lines("text").into_iter().enumerate() {
        let top = first_top + i as f64 * LINE_HEIGHT;
        if top + LINE_HEIGHT > height {
            break;
        }
        let number = (i + 1).to_string();
        let number_x = GUTTER_WIDTH - 8.0 - text.measure(&number, GUTTER_FONT_PX);
        text.draw(ctx, &number, number_x, top + 2.0, GUTTER_FONT_PX, LINE_NUMBER_FG);
        text.draw(
            ctx,
            line,
            GUTTER_WIDTH + TEXT_INSET,
            top,
            FONT_PX,
            classify_line(line).color(),
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/texture/code.rs"]
mod tests;
