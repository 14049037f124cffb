//! Drawing surface with an explicit vertical cursor.
//!
//! Layout runs in a top-origin coordinate system: y is 0 at the top edge of
//! the page and decreases going down, so a block advances with
//! `y -= line_height`. Conversion to printpdf's bottom-left space happens
//! only at the drawing call.

use printpdf::{IndirectFontRef, Mm, PdfLayerReference, Pt};

use crate::layout::{wrap_block, TextMeasure, WrapParams};

/// One page's drawing handle plus the threaded y cursor. Owned exclusively
/// by the rendering routine for the lifetime of one document.
pub struct PageContext {
    layer: PdfLayerReference,
    height_pt: f64,
    /// Top-origin vertical cursor; 0 at the top edge, negative downward.
    pub cursor_y: f64,
}

impl PageContext {
    pub fn new(layer: PdfLayerReference, height_pt: f64, start_y: f64) -> Self {
        Self {
            layer,
            height_pt,
            cursor_y: start_y,
        }
    }

    /// Moves the cursor down by `dy` points.
    pub fn advance(&mut self, dy: f64) {
        self.cursor_y -= dy;
    }

    /// Draws a single line at an absolute position, without touching the
    /// cursor.
    pub fn draw_line_at(
        &self,
        text: &str,
        x: f64,
        y: f64,
        font: &IndirectFontRef,
        size_pt: f64,
    ) {
        self.layer.use_text(
            text,
            size_pt as f32,
            Mm::from(Pt(x as f32)),
            Mm::from(Pt((self.height_pt + y) as f32)),
            font,
        );
    }

    /// Wraps `text` at the cursor and draws every line, then advances the
    /// cursor past the block (including the trailing separation).
    pub fn draw_wrapped(
        &mut self,
        text: &str,
        x: f64,
        params: &WrapParams,
        measure: &dyn TextMeasure,
        font: &IndirectFontRef,
        size_pt: f64,
    ) {
        let block = wrap_block(text, x, self.cursor_y, params, measure);
        let mut y = self.cursor_y;
        for line in &block.lines {
            self.draw_line_at(line, x, y, font, size_pt);
            y -= params.line_height;
        }
        self.cursor_y = block.end_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{BuiltinFont, PdfDocument};
    use std::io::BufWriter;

    /// The layout math is f64 but the PDF backend takes f32 geometry; this
    /// drives both draw paths end to end through the conversion boundary and
    /// saves a real document. Builtin font, so it runs on any host.
    #[test]
    fn test_point_geometry_reaches_backend_and_saves() {
        let (doc, page_idx, layer_idx) =
            PdfDocument::new("test", Mm::from(Pt(595.27)), Mm::from(Pt(841.89)), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).unwrap();
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        let mut page = PageContext::new(layer, 841.89, -72.0);

        page.draw_line_at("tytul", 72.0, page.cursor_y, &font, 12.0);
        page.advance(40.0);

        let params = WrapParams {
            max_width: 523.27,
            line_height: 20.0,
            line_separation: 20.0,
        };
        let measure = |s: &str| s.chars().count() as f64 * 6.0;
        page.draw_wrapped("jeden dwa trzy", 72.0, &params, &measure, &font, 11.0);
        assert!(
            page.cursor_y < -112.0,
            "cursor must advance past the wrapped block, got {}",
            page.cursor_y
        );

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf).unwrap();
        let bytes = buf.into_inner().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
