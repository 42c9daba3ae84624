// src/export/style.rs

/// Immutable page layout and styling for the generated document.
/// Injected into the exporter; there is no per-session variation.
#[derive(Debug, Clone)]
pub struct ExportStyle {
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,

    /// Header band on the first page (report heading).
    pub header_band_height_mm: f32,

    /// Title banner and section banner fills.
    pub title_fill: (f32, f32, f32),
    pub sub_title_fill: (f32, f32, f32),
    pub table_border: (f32, f32, f32),

    pub title_font_size: f32,
    pub sub_title_font_size: f32,
    pub body_font_size: f32,

    pub line_height_mm: f32,
    pub row_padding_mm: f32,
    pub label_column_mm: f32,

    pub image_max_width_mm: f32,
    pub image_dpi: f32,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            // A4
            page_width_mm: 210.0,
            page_height_mm: 297.0,

            margin_left_mm: 15.0,
            margin_right_mm: 15.0,
            margin_top_mm: 15.0,
            margin_bottom_mm: 15.0,

            header_band_height_mm: 18.0,

            // #3fa5f2 / #60b1f0 / #dddddd
            title_fill: (0.247, 0.647, 0.949),
            sub_title_fill: (0.376, 0.694, 0.941),
            table_border: (0.867, 0.867, 0.867),

            title_font_size: 16.0,
            sub_title_font_size: 12.0,
            body_font_size: 9.0,

            line_height_mm: 4.6,
            row_padding_mm: 1.6,
            label_column_mm: 58.0,

            image_max_width_mm: 53.0,
            image_dpi: 96.0,
        }
    }
}

impl ExportStyle {
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    pub fn value_column_mm(&self) -> f32 {
        self.content_width_mm() - self.label_column_mm
    }
}
