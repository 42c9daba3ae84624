// src/export/pdf.rs

use crate::error::{AppError, AppResult};
use crate::export::style::ExportStyle;
use crate::form::value::ImageData;
use crate::report::document::{CellContent, Fragment, ReportDocument, RowEntry, SectionBlock};
use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Rect, Rgb,
};
use std::fs;
use std::path::Path;

const PT_TO_MM: f32 = 0.352_778;

/// Renders the formatted document to a paginated A4 PDF and persists it.
/// Rendering happens fully in memory; the file is written in one shot so a
/// failed render never leaves a partial file behind.
pub struct PdfExporter {
    style: ExportStyle,
}

impl PdfExporter {
    pub fn new(style: ExportStyle) -> Self {
        Self { style }
    }

    pub fn write(&self, report: &ReportDocument, path: &Path) -> AppResult<()> {
        let bytes = self.render(report)?;
        fs::write(path, &bytes).map_err(|e| AppError::PdfPersist(e.to_string()))
    }

    pub fn render(&self, report: &ReportDocument) -> AppResult<Vec<u8>> {
        let s = &self.style;

        let (doc, page1, layer1) = PdfDocument::new(
            &report.title,
            Mm(s.page_width_mm),
            Mm(s.page_height_mm),
            "Página 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::PdfRender(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::PdfRender(e.to_string()))?;

        {
            let mut page = PageWriter {
                doc: &doc,
                style: s,
                font: &font,
                font_bold: &font_bold,
                layer: doc.get_page(page1).get_layer(layer1),
                y: s.page_height_mm - s.margin_top_mm,
                page_no: 1,
            };

            page.draw_header(&report.header);
            page.draw_banner(&report.title, s.title_fill, s.title_font_size, 10.0);
            page.gap(3.0);

            for section in &report.sections {
                page.draw_section(section)?;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| AppError::PdfRender(e.to_string()))
    }
}

/// A prepared cell piece: wrapped text lines or a sized image.
enum Piece {
    Lines(Vec<String>),
    Picture {
        img: DynamicImage,
        height_mm: f32,
        scale: f32,
    },
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    style: &'a ExportStyle,
    font: &'a IndirectFontRef,
    font_bold: &'a IndirectFontRef,
    layer: PdfLayerReference,
    /// Cursor, in mm from the bottom edge.
    y: f32,
    page_no: usize,
}

impl PageWriter<'_> {
    fn new_page(&mut self) {
        self.page_no += 1;
        let s = self.style;
        let (pi, li) = self.doc.add_page(
            Mm(s.page_width_mm),
            Mm(s.page_height_mm),
            format!("Página {}", self.page_no),
        );
        self.layer = self.doc.get_page(pi).get_layer(li);
        self.y = s.page_height_mm - s.margin_top_mm;
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm < self.style.margin_bottom_mm {
            self.new_page();
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn set_fill(&self, color: (f32, f32, f32)) {
        self.layer.set_fill_color(rgb(color));
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
        self.set_fill(color);
        self.layer
            .add_rect(Rect::new(Mm(x), Mm(y), Mm(x + w), Mm(y + h)).with_mode(PaintMode::Fill));
    }

    fn stroke_rect(&self, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(0.5);
        self.layer
            .add_rect(Rect::new(Mm(x), Mm(y), Mm(x + w), Mm(y + h)).with_mode(PaintMode::Stroke));
    }

    /// Fixed header band on the first page.
    fn draw_header(&mut self, header: &str) {
        let s = self.style;
        self.set_fill((0.2, 0.2, 0.2));
        self.layer.use_text(
            header,
            s.title_font_size,
            Mm(s.margin_left_mm),
            Mm(self.y - 7.0),
            self.font_bold,
        );
        let rule_y = self.y - s.header_band_height_mm + 4.0;
        self.fill_rect(
            s.margin_left_mm,
            rule_y,
            s.content_width_mm(),
            0.6,
            (0.267, 0.267, 0.267),
        );
        self.y -= s.header_band_height_mm;
    }

    fn draw_banner(&mut self, text: &str, fill: (f32, f32, f32), font_size: f32, band_h: f32) {
        // Keep the banner attached to at least one row of what follows.
        self.ensure_room(band_h + self.style.line_height_mm);

        let s = self.style;
        let y0 = self.y - band_h;
        self.fill_rect(s.margin_left_mm, y0, s.content_width_mm(), band_h, fill);

        self.set_fill((1.0, 1.0, 1.0));
        self.layer.use_text(
            text,
            font_size,
            Mm(s.margin_left_mm + 2.0),
            Mm(y0 + (band_h - font_size * PT_TO_MM) / 2.0 + 0.8),
            self.font_bold,
        );

        self.y = y0;
    }

    fn draw_section(&mut self, section: &SectionBlock) -> AppResult<()> {
        let s = self.style;
        self.draw_banner(&section.title, s.sub_title_fill, s.sub_title_font_size, 8.0);
        self.gap(1.0);

        for row in &section.rows {
            self.draw_row(row)?;
        }

        self.gap(6.0);
        Ok(())
    }

    fn draw_row(&mut self, row: &RowEntry) -> AppResult<()> {
        let s = self.style;
        let pad = s.row_padding_mm;
        let line_h = s.line_height_mm;

        let label_width = s.label_column_mm;
        let value_width = s.value_column_mm();

        let label_lines = wrap_text(
            &row.label,
            chars_per_line(label_width - 2.0 * pad, s.body_font_size),
        );
        let pieces = self.prepare_cell(&row.content, value_width - 2.0 * pad)?;

        let label_h = label_lines.len() as f32 * line_h;
        let value_h = pieces_height(&pieces, line_h).max(line_h);
        let row_h = label_h.max(value_h) + 2.0 * pad;

        self.ensure_room(row_h);

        let x0 = s.margin_left_mm;
        let y_top = self.y;
        let y0 = y_top - row_h;

        self.stroke_rect(x0, y0, label_width, row_h, s.table_border);
        self.stroke_rect(x0 + label_width, y0, value_width, row_h, s.table_border);

        // Label column, bold.
        self.set_fill((0.0, 0.0, 0.0));
        let mut ly = y_top - pad;
        for line in &label_lines {
            self.layer.use_text(
                line,
                s.body_font_size,
                Mm(x0 + pad),
                Mm(ly - line_h * 0.75),
                self.font_bold,
            );
            ly -= line_h;
        }

        // Value column.
        let vx = x0 + label_width + pad;
        let mut vy = y_top - pad;
        for piece in pieces {
            match piece {
                Piece::Lines(lines) => {
                    for line in lines {
                        self.layer.use_text(
                            &line,
                            s.body_font_size,
                            Mm(vx),
                            Mm(vy - line_h * 0.75),
                            self.font,
                        );
                        vy -= line_h;
                    }
                }
                Piece::Picture {
                    img,
                    height_mm,
                    scale,
                } => {
                    let pdf_img = Image::from_dynamic_image(&img);
                    pdf_img.add_to_layer(
                        self.layer.clone(),
                        ImageTransform {
                            translate_x: Some(Mm(vx)),
                            translate_y: Some(Mm(vy - height_mm)),
                            scale_x: Some(scale),
                            scale_y: Some(scale),
                            dpi: Some(s.image_dpi),
                            ..Default::default()
                        },
                    );
                    vy -= height_mm + 1.0;
                }
            }
        }

        self.y = y0;
        Ok(())
    }

    fn prepare_cell(&self, content: &CellContent, avail_width_mm: f32) -> AppResult<Vec<Piece>> {
        let max_chars = chars_per_line(avail_width_mm, self.style.body_font_size);

        content
            .fragments
            .iter()
            .map(|frag| match frag {
                Fragment::Text(s) => Ok(Piece::Lines(wrap_text(s, max_chars))),
                Fragment::Image(img) => self.prepare_image(img, avail_width_mm),
            })
            .collect()
    }

    fn prepare_image(&self, payload: &ImageData, avail_width_mm: f32) -> AppResult<Piece> {
        let s = self.style;
        let bytes = payload.decode()?;
        let decoded = printpdf::image_crate::load_from_memory(&bytes)
            .map_err(|e| AppError::ImageDecode(e.to_string()))?;
        // Drop alpha: the PDF embedding expects plain RGB.
        let img = DynamicImage::ImageRgb8(decoded.to_rgb8());

        let (px_w, px_h) = img.dimensions();
        let natural_w_mm = px_w as f32 / s.image_dpi * 25.4;
        let natural_h_mm = px_h as f32 / s.image_dpi * 25.4;

        let max_w = s.image_max_width_mm.min(avail_width_mm);
        let scale = fit_scale(natural_w_mm, max_w);

        Ok(Piece::Picture {
            img,
            height_mm: natural_h_mm * scale,
            scale,
        })
    }
}

fn pieces_height(pieces: &[Piece], line_h: f32) -> f32 {
    pieces
        .iter()
        .map(|p| match p {
            Piece::Lines(lines) => lines.len() as f32 * line_h,
            Piece::Picture { height_mm, .. } => height_mm + 1.0,
        })
        .sum()
}

fn rgb(c: (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(c.0, c.1, c.2, None))
}

/// Images are shrunk to the column, never enlarged.
fn fit_scale(natural_w_mm: f32, max_w_mm: f32) -> f32 {
    if natural_w_mm <= max_w_mm || natural_w_mm <= 0.0 {
        1.0
    } else {
        max_w_mm / natural_w_mm
    }
}

/// Approximate character budget for a column of builtin Helvetica.
fn chars_per_line(width_mm: f32, font_size_pt: f32) -> usize {
    let avg_char_mm = font_size_pt * PT_TO_MM * 0.5;
    ((width_mm / avg_char_mm).floor() as usize).max(8)
}

/// Greedy word wrap; respects embedded newlines and hard-splits words that
/// exceed the line budget on their own.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.chars().count() <= max_chars {
            out.push(raw_line.to_string());
            continue;
        }

        let mut line = String::new();
        let mut line_len = 0usize;

        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();

            if line_len > 0 && line_len + 1 + word_len > max_chars {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }

            if word_len > max_chars {
                // Hard-split an oversized token (base64-ish strings).
                let mut chunk = String::new();
                for ch in word.chars() {
                    chunk.push(ch);
                    if chunk.chars().count() == max_chars {
                        out.push(std::mem::take(&mut chunk));
                    }
                }
                if !chunk.is_empty() {
                    line = chunk;
                    line_len = line.chars().count();
                }
                continue;
            }

            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }

        if !line.is_empty() || raw_line.trim().is_empty() {
            out.push(line);
        }
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

// ======================================================
// Unit Tests
// ======================================================
