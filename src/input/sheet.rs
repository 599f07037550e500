//! Header-indexed CSV sheet.
//!
//! Downstream code addresses columns by name, never by position, so a sheet
//! that lacks a contract column aborts the run instead of silently producing
//! an empty column (`AppError::MissingColumn`). Header names are
//! whitespace-trimmed on load; extra columns pass through untouched.

use crate::errors::{AppError, AppResult};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Sheet {
    nombre: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn read(path: &Path, nombre: &str) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.display().to_string()));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self {
            nombre: nombre.to_string(),
            headers,
            rows,
        })
    }

    /// Index of a mandatory column. Missing column = fatal.
    pub fn col(&self, columna: &str) -> AppResult<usize> {
        self.col_opt(columna)
            .ok_or_else(|| AppError::MissingColumn {
                tabla: self.nombre.clone(),
                columna: columna.to_string(),
            })
    }

    /// Index of an optional column.
    pub fn col_opt(&self, columna: &str) -> Option<usize> {
        let buscada = columna.trim();
        self.headers.iter().position(|h| h == buscada)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell accessor; short rows read as empty cells.
    pub fn cell<'a>(&self, row: &'a [String], idx: usize) -> &'a str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }
}
