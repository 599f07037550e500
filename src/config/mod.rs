use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the input sheets (TABLAS_BD/, BASE_DATOS.csv, ...).
    pub archivos: String,
    /// Where the timestamped output directory is created; defaults to
    /// `archivos` when empty.
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default = "default_primer_id")]
    pub primer_id: i64,
    #[serde(default = "default_tasa_hora")]
    pub tasa_hora: u32,
    /// Drop rows whose chapa cleaned to "nan" instead of surfacing them in
    /// the auxiliary user table.
    #[serde(default)]
    pub descartar_chapas_invalidas: bool,
    #[serde(default = "default_id_tipo_valid")]
    pub id_tipo_valid: u32,
    /// Validating user stamped on every T_ANOTACIONES_VALID_SUBIR row.
    #[serde(default = "default_usuario_valid")]
    pub usuario_valid: String,
}

fn default_primer_id() -> i64 {
    47000
}
fn default_tasa_hora() -> u32 {
    80
}
fn default_id_tipo_valid() -> u32 {
    1
}
fn default_usuario_valid() -> String {
    "0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archivos: "./archivos".to_string(),
            output: None,
            primer_id: default_primer_id(),
            tasa_hora: default_tasa_hora(),
            descartar_chapas_invalidas: false,
            id_tipo_valid: default_id_tipo_valid(),
            usuario_valid: default_usuario_valid(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.iptareas`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".iptareas")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("iptareas.conf")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unparseable (a broken config file should not abort a batch run).
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Ignoring unreadable config {}: {e}",
                        path.display()
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Ignoring unreadable config {}: {e}", path.display()));
                Self::default()
            }
        }
    }
}
