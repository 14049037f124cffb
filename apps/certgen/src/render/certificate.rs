//! Composes and saves the one-page certificate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{IndirectFontRef, Mm, PdfDocument, Pt};

use crate::errors::AppError;
use crate::layout::{PageConfig, WrapParams};
use crate::models::CertificateRequest;
use crate::render::fonts::LoadedFonts;
use crate::render::page::PageContext;

const TITLE: &str = "ZAŚWIADCZENIE";
const TASKS_LEAD_IN: &str = "Zakres wykonywanych świadczeń obejmował:";
const SIGNATURE_CAPTION: &str = "(podpis organizatora)";

/// Renders `request` onto a fresh A4 page and writes the PDF to `output`.
/// If the write fails mid-stream a truncated file may remain at the path;
/// there is no cleanup.
pub fn generate(
    request: &CertificateRequest,
    fonts: &LoadedFonts,
    cfg: &PageConfig,
    output: &Path,
) -> Result<(), AppError> {
    let (doc, page_idx, layer_idx) = PdfDocument::new(
        "Zaświadczenie o wykonywaniu świadczeń wolontariackich",
        Mm::from(Pt(cfg.width_pt as f32)),
        Mm::from(Pt(cfg.height_pt as f32)),
        "Layer 1",
    );
    let regular = doc
        .add_external_font(fonts.regular.bytes.as_slice())
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let bold = doc
        .add_external_font(fonts.bold.bytes.as_slice())
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let layer = doc.get_page(page_idx).get_layer(layer_idx);
    let mut page = PageContext::new(layer, cfg.height_pt, -cfg.margin_pt);

    // Centered bold title.
    let title_w = fonts.bold.metrics.text_width(TITLE, cfg.title_size_pt);
    page.draw_line_at(
        TITLE,
        (cfg.width_pt - title_w) / 2.0,
        page.cursor_y,
        &bold,
        cfg.title_size_pt,
    );
    page.advance(2.0 * cfg.line_separation_pt);

    let params = WrapParams {
        max_width: cfg.wrap_width(),
        line_height: cfg.line_height_pt,
        line_separation: cfg.line_separation_pt,
    };
    let body = fonts.regular.metrics.at_size(cfg.body_size_pt);

    // Narrative, interpolating the four fields in fixed template order.
    let narrative = format!(
        "Niniejszym zaświadcza się, że {} wykonywał(a) świadczenia wolontariackie \
         na rzecz {} w dniu {} podczas wydarzenia {}.",
        request.volunteer, request.organizer, request.date, request.event
    );
    page.draw_wrapped(
        &narrative,
        cfg.margin_pt,
        &params,
        &body,
        &regular,
        cfg.body_size_pt,
    );

    page.draw_wrapped(
        TASKS_LEAD_IN,
        cfg.margin_pt,
        &params,
        &body,
        &regular,
        cfg.body_size_pt,
    );

    // Task bullets, input order, drawn one indent step to the right. The
    // indent is part of the wrap budget, so these wrap earlier than the
    // narrative.
    for task in &request.tasks {
        let bullet = format!("• {task}");
        page.draw_wrapped(
            &bullet,
            cfg.margin_pt + cfg.indent_pt,
            &params,
            &body,
            &regular,
            cfg.body_size_pt,
        );
    }

    draw_signature_block(&page, fonts, cfg, &regular);

    let file = File::create(output)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    Ok(())
}

/// Dotted signature line with a caption, bottom right of the page.
fn draw_signature_block(
    page: &PageContext,
    fonts: &LoadedFonts,
    cfg: &PageConfig,
    font: &IndirectFontRef,
) {
    let dots = ".".repeat(40);
    let y = -(cfg.height_pt - cfg.margin_pt - 2.0 * cfg.line_height_pt);
    let right = cfg.wrap_width();

    let dots_w = fonts.regular.metrics.text_width(&dots, cfg.body_size_pt);
    page.draw_line_at(&dots, right - dots_w, y, font, cfg.body_size_pt);

    let caption_w = fonts
        .regular
        .metrics
        .text_width(SIGNATURE_CAPTION, cfg.body_size_pt);
    page.draw_line_at(
        SIGNATURE_CAPTION,
        right - dots_w / 2.0 - caption_w / 2.0,
        y - cfg.line_height_pt,
        font,
        cfg.body_size_pt,
    );
}
