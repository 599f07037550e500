// src/export/csv_json.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::TablaExport;
use crate::export::notify_export_success;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export CSV, header row included.
pub(crate) fn export_csv(tabla: &TablaExport, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&tabla.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &tabla.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success(&tabla.nombre, path);
    Ok(())
}

/// Export JSON pretty-printed, one object per row keyed by header.
pub(crate) fn export_json(tabla: &TablaExport, path: &Path) -> AppResult<()> {
    let objetos: Vec<serde_json::Value> = tabla
        .rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            for (header, cell) in tabla.headers.iter().zip(row) {
                obj.insert(
                    header.to_string(),
                    serde_json::Value::String(cell.clone()),
                );
            }
            serde_json::Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&objetos)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(&tabla.nombre, path);
    Ok(())
}
