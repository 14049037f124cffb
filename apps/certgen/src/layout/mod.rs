// Text layout: greedy wrap engine, glyph metrics, fixed page geometry.

pub mod font_metrics;
pub mod page;
pub mod wrap;

// Re-export the public API consumed by the renderer.
pub use font_metrics::FontMetrics;
pub use page::{default_page_config, PageConfig};
pub use wrap::{wrap_block, TextMeasure, WrapParams};
