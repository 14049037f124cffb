//! Fixed page geometry for the certificate.

/// Layout parameters for the single certificate page. All values in points.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub width_pt: f64,
    pub height_pt: f64,
    pub margin_pt: f64,
    /// Horizontal inset for the task bullet column, added to the margin.
    pub indent_pt: f64,
    pub title_size_pt: f64,
    pub body_size_pt: f64,
    /// Vertical advance per wrapped line.
    pub line_height_pt: f64,
    /// Extra gap after each wrapped block. Coincidentally equal to
    /// `line_height_pt`, but a distinct constant.
    pub line_separation_pt: f64,
}

/// A4 in points, 1" margins, 12pt title over 11pt body, 20pt line advance.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.27,
        height_pt: 841.89,
        margin_pt: 72.0,
        indent_pt: 18.0,
        title_size_pt: 12.0,
        body_size_pt: 11.0,
        line_height_pt: 20.0,
        line_separation_pt: 20.0,
    }
}

impl PageConfig {
    /// Right-edge x coordinate text must not cross (the wrap width budget).
    pub fn wrap_width(&self) -> f64 {
        self.width_pt - self.margin_pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_config_is_a4_points() {
        let cfg = default_page_config();
        assert!((cfg.width_pt - 595.27).abs() < 1e-9);
        assert!((cfg.height_pt - 841.89).abs() < 1e-9);
        assert_eq!(cfg.margin_pt, 72.0);
        assert_eq!(cfg.line_height_pt, cfg.line_separation_pt);
    }

    #[test]
    fn test_wrap_width_is_right_edge_not_column_width() {
        let cfg = default_page_config();
        assert_eq!(cfg.wrap_width(), cfg.width_pt - cfg.margin_pt);
    }
}
