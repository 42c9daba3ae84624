// src/report/mod.rs

pub mod document;
pub mod format;
pub mod labels;

pub use document::*;
pub use format::format;
pub use labels::LabelTable;
