//! Glyph metrics backed by the same TTF bytes that get embedded in the PDF.
//!
//! Widths are summed advance widths at the requested point size. Characters
//! the font has no glyph for resolve to the font's `.notdef` glyph and take
//! whatever advance it carries (commonly zero); that is the measurement
//! backend's behavior, not part of the wrap contract.

use rusttype::{point, Font, Scale};

use crate::errors::AppError;
use crate::layout::wrap::TextMeasure;

/// Parsed font with width measurement at arbitrary point sizes.
pub struct FontMetrics {
    font: Font<'static>,
}

impl FontMetrics {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, AppError> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| AppError::FontParse("not a parseable TTF/OTF".to_string()))?;
        Ok(Self { font })
    }

    /// Rendered width of `text` at `size_pt`, in points.
    pub fn text_width(&self, text: &str, size_pt: f64) -> f64 {
        let scale = Scale::uniform(size_pt as f32);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .map(|glyph| glyph.unpositioned().h_metrics().advance_width as f64)
            .sum()
    }

    /// Binds a point size, yielding the measure capability the wrap engine
    /// consumes.
    pub fn at_size(&self, size_pt: f64) -> SizedFont<'_> {
        SizedFont {
            metrics: self,
            size_pt,
        }
    }
}

/// A font fixed at one point size.
pub struct SizedFont<'a> {
    metrics: &'a FontMetrics,
    size_pt: f64,
}

impl TextMeasure for SizedFont<'_> {
    fn width(&self, text: &str) -> f64 {
        self.metrics.text_width(text, self.size_pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::discover_font_pair;

    /// Loads the system regular face, or None when the host has no usable
    /// font pair (the test is then skipped).
    fn system_metrics() -> Option<FontMetrics> {
        let pair = discover_font_pair(None).ok()?;
        FontMetrics::from_bytes(std::fs::read(&pair.regular).ok()?).ok()
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = FontMetrics::from_bytes(vec![0u8; 64]);
        assert!(err.is_err(), "64 zero bytes are not a font");
    }

    #[test]
    fn test_empty_string_measures_zero() {
        let Some(metrics) = system_metrics() else {
            return;
        };
        assert_eq!(metrics.text_width("", 11.0), 0.0);
    }

    #[test]
    fn test_longer_string_measures_wider() {
        let Some(metrics) = system_metrics() else {
            return;
        };
        let short = metrics.text_width("Piknik", 11.0);
        let long = metrics.text_width("Piknik rodzinny w parku", 11.0);
        assert!(
            long > short,
            "longer string should be wider: {long} vs {short}"
        );
    }

    #[test]
    fn test_width_scales_with_size() {
        let Some(metrics) = system_metrics() else {
            return;
        };
        let at_11 = metrics.text_width("Zaświadczenie", 11.0);
        let at_22 = metrics.text_width("Zaświadczenie", 22.0);
        assert!(
            at_22 > at_11 * 1.8,
            "doubling the size should roughly double the width: {at_11} → {at_22}"
        );
    }

    #[test]
    fn test_sized_font_matches_text_width() {
        let Some(metrics) = system_metrics() else {
            return;
        };
        let sized = metrics.at_size(11.0);
        assert_eq!(sized.width("Obsługa stoiska"), metrics.text_width("Obsługa stoiska", 11.0));
    }
}
