// src/report/document.rs

use crate::form::value::ImageData;

pub const REPORT_HEADER: &str = "INFORME TÉCNICO";
pub const REPORT_TITLE: &str = "Formulario de Intervención Técnica";

/// One piece of a table cell: a line of text or an inline image.
/// Fragments stack vertically in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Image(ImageData),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellContent {
    pub fragments: Vec<Fragment>,
}

impl CellContent {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Text fragments joined with line breaks; images contribute nothing.
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self
            .fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Text(s) => Some(s.as_str()),
                Fragment::Image(_) => None,
            })
            .collect();
        lines.join("\n")
    }

    pub fn images(&self) -> Vec<&ImageData> {
        self.fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Image(img) => Some(img),
                Fragment::Text(_) => None,
            })
            .collect()
    }
}

/// One table row: translated label + formatted value.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub label: String,
    pub content: CellContent,
}

/// One section table, in wizard section order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub title: String,
    pub rows: Vec<RowEntry>,
}

/// The formatted intermediate representation handed to the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub header: String,
    pub title: String,
    pub sections: Vec<SectionBlock>,
}

impl ReportDocument {
    pub fn section(&self, title: &str) -> Option<&SectionBlock> {
        self.sections.iter().find(|s| s.title == title)
    }
}
