use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = cmd
    else {
        return Ok(());
    };

    if *print_config {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot render config: {e}")))?;
        info(format!("Config file: {}", Config::config_file().display()));
        println!("{yaml}");
    }

    if *check {
        check_inputs(cfg);
    }

    Ok(())
}

/// Report which expected input files are present under the archivos dir.
fn check_inputs(cfg: &Config) {
    let archivos = Path::new(&cfg.archivos);
    let esperados = [
        "TABLAS_BD/T_USUARIOS.csv",
        "TABLAS_BD/T_OBRAS.csv",
        "TABLAS_BD/T_PROCESOS.csv",
        "TABLAS_BD/T_TAREAS.csv",
        "BASE_DATOS.csv",
        "ASIGNACIONES_TAREAS.csv",
        "MAESTRO_MODIFICACIONES.csv",
    ];

    let mut faltan = 0;
    for rel in esperados {
        let path = archivos.join(rel);
        if path.exists() {
            success(format!("found {}", path.display()));
        } else {
            warning(format!("missing {}", path.display()));
            faltan += 1;
        }
    }

    if faltan == 0 {
        success("All input files present");
    } else {
        warning(format!("{faltan} input file(s) missing"));
    }
}
