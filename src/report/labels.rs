// src/report/labels.rs

use crate::error::{AppError, AppResult};
use std::collections::BTreeMap;

/// The builtin key -> display-label table shipped with the app.
const BUILTIN_TABLE_JSON5: &str = include_str!("../../assets/labels.json5");

/// Static lookup from internal field identifiers to display labels.
/// Unmapped keys pass through verbatim.
#[derive(Debug, Clone)]
pub struct LabelTable {
    map: BTreeMap<String, String>,
}

impl LabelTable {
    pub fn builtin() -> AppResult<Self> {
        Self::from_json5(BUILTIN_TABLE_JSON5)
    }

    pub fn from_json5(s: &str) -> AppResult<Self> {
        let map: BTreeMap<String, String> =
            json5::from_str(s).map_err(|e| AppError::LabelTableParse(e.to_string()))?;
        Ok(Self { map })
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.map.get(key).map(String::as_str).unwrap_or(key)
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let t = LabelTable::builtin().expect("builtin labels");
        assert_eq!(t.translate("projects"), "Proyecto");
        assert_eq!(t.translate("maintenance"), "Mantenimiento");
        assert_eq!(t.translate("departureTime"), "Hora de salida");
        assert_eq!(t.translate("signature"), "Firma");
    }

    #[test]
    fn unmapped_keys_pass_through_verbatim() {
        let t = LabelTable::builtin().expect("builtin labels");
        assert_eq!(t.translate("noSuchKey"), "noSuchKey");
        assert_eq!(t.translate(""), "");
    }

    #[test]
    fn from_json5_rejects_malformed_input() {
        let err = LabelTable::from_json5("{ key: ").unwrap_err();
        assert!(matches!(err, AppError::LabelTableParse(_)));
    }
}
