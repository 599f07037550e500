//! Text cleanup helpers shared by the normalizer and the detectors.

/// Clean a raw chapa (employee id) cell: trim, drop a single trailing `.0`
/// left behind by numeric storage, and map empty cells to the literal
/// `"nan"` so unmatched ids surface in the auxiliary user table instead of
/// vanishing.
pub fn limpia_chapa(raw: &str) -> String {
    let t = raw.trim();
    if t.is_empty() {
        return "nan".to_string();
    }
    let t = t.strip_suffix(".0").unwrap_or(t);
    t.trim().to_string()
}

/// Normalized comparison key for work keys and charged-to values coming from
/// free-text cells.
pub fn clave_norm(raw: &str) -> String {
    raw.trim().to_string()
}

/// Empty-or-whitespace check used to decide whether an optional cell counts
/// as present.
pub fn es_vacio(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parse the HORAS cell. The workbook mixes dot and comma decimals;
/// unparseable values degrade to None rather than aborting the run.
pub fn parse_horas(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.replace(',', ".").parse::<f64>().ok()
}
