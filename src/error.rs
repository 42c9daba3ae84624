// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    StateLockPoisoned,

    // --------------------------------------------------
    // configuration
    // --------------------------------------------------
    LabelTableParse(String),

    // --------------------------------------------------
    // form input
    // --------------------------------------------------
    TransferLegsFull { max: usize },
    ExecutionDaysFull { max: usize },
    ImageDecode(String),
    InvalidImagePayload,

    // --------------------------------------------------
    // export pipeline
    // --------------------------------------------------
    StoragePermissionDenied(String),
    PdfRender(String),
    PdfPersist(String),
    ShareFailed(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "No se pudo generar el PDF.",
            StateLockPoisoned => "Error interno de la aplicación.",

            // configuration
            LabelTableParse(_) => "Error interno de la aplicación.",

            // form input
            TransferLegsFull { .. } => {
                kind = UserMsgKind::Warn;
                "Máximo 3 fechas de traslado."
            }
            ExecutionDaysFull { .. } => {
                kind = UserMsgKind::Warn;
                "Máximo 7 días de ejecución."
            }
            ImageDecode(_) | InvalidImagePayload => "No se pudo cargar la imagen.",

            // export
            StoragePermissionDenied(_) => {
                "No se puede guardar el PDF sin permisos de almacenamiento."
            }
            // One generic message for any render/persist/share failure;
            // the detail string keeps the specific cause for the log.
            PdfRender(_) | PdfPersist(_) | ShareFailed(_) => "No se pudo generar el PDF.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            StateLockPoisoned => write!(f, "state lock poisoned"),

            LabelTableParse(s) => write!(f, "label table parse failed: {s}"),

            TransferLegsFull { max } => write!(f, "transfer legs full: max {max}"),
            ExecutionDaysFull { max } => write!(f, "execution days full: max {max}"),
            ImageDecode(s) => write!(f, "image decode failed: {s}"),
            InvalidImagePayload => write!(f, "invalid image payload"),

            StoragePermissionDenied(s) => write!(f, "storage permission denied: {s}"),
            PdfRender(s) => write!(f, "pdf render failed: {s}"),
            PdfPersist(s) => write!(f, "pdf persist failed: {s}"),
            ShareFailed(s) => write!(f, "share failed: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
