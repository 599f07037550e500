// src/export/mod.rs

mod csv_json;
mod fs_utils;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::TablaExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all writers.
pub(crate) fn notify_export_success(tabla: &str, path: &Path) {
    success(format!("{tabla} exported: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
