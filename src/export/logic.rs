// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_json::{export_csv, export_json};
use crate::export::fs_utils::crear_output_dir;
use crate::export::model::TablaExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::info;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// High-level export: write every table of one run into a fresh timestamped
/// directory.
pub struct ExportLogic;

impl ExportLogic {
    /// `base`: directory under which `output/output_{timestamp}/` is created.
    /// Returns the created run directory.
    pub fn exportar(
        base: &Path,
        formato: &ExportFormat,
        timestamp: NaiveDateTime,
        tablas: &[TablaExport],
    ) -> AppResult<PathBuf> {
        // Tables are already computed at this point; only now touch the disk.
        let dir = crear_output_dir(base, timestamp)?;
        info(format!("Writing output to {}", dir.display()));

        for tabla in tablas {
            let path = dir.join(format!("{}.{}", tabla.nombre, formato.extension()));
            match formato {
                ExportFormat::Csv => export_csv(tabla, &path)?,
                ExportFormat::Json => export_json(tabla, &path)?,
                ExportFormat::Xlsx => export_xlsx(tabla, &path)?,
            }
        }

        Ok(dir)
    }
}
