// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "com";
pub const APP_ORG: &str = "informe-tecnico";
pub const APP_ID: &str = "informe-tecnico";

pub const PDF_DIR_NAME: &str = "PDFs";
pub const PDF_FILE_NAME: &str = "Formulario_Intervencion_Tecnica.pdf";
pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("INFORME_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_data_dir,
            debug_ui,
        }
    }

    /// <app_data>/PDFs
    pub fn pdf_dir(&self) -> PathBuf {
        self.app_data_dir.join(PDF_DIR_NAME)
    }

    /// <app_data>/PDFs/Formulario_Intervencion_Tecnica.pdf
    ///
    /// Static name: each submission overwrites the previous file.
    pub fn pdf_path(&self) -> PathBuf {
        self.pdf_dir().join(PDF_FILE_NAME)
    }
}
