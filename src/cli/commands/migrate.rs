use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{self, OpcionesMigracion};
use crate::errors::{AppError, AppResult};
use crate::export::logic::ExportLogic;
use crate::export::model::{
    tabla_anotaciones, tabla_base, tabla_obras_subir, tabla_usuarios_subir, tabla_valid,
};
use crate::input::loaders::{load_asignaciones, load_base, load_maestro, load_tablas_bd};
use crate::ui::messages::{info, success};
use chrono::NaiveDate;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Migrate {
        output,
        primer_id,
        format,
        fecha_valid,
        usuario_valid,
        descartar_chapas_invalidas,
    } = cmd
    else {
        return Ok(());
    };

    let archivos = Path::new(&cfg.archivos);

    // ------------- EXTRACT -------------
    let tablas_bd = load_tablas_bd(&archivos.join("TABLAS_BD"))?;
    let base = load_base(&archivos.join("BASE_DATOS.csv"))?;
    let asignaciones = load_asignaciones(&archivos.join("ASIGNACIONES_TAREAS.csv"))?;
    let maestro = load_maestro(&archivos.join("MAESTRO_MODIFICACIONES.csv"))?;

    // ------------- TRANSFORM -------------
    let opciones = OpcionesMigracion {
        primer_id: primer_id.unwrap_or(cfg.primer_id),
        tasa_hora: cfg.tasa_hora,
        descartar_chapas_invalidas: *descartar_chapas_invalidas
            || cfg.descartar_chapas_invalidas,
        id_tipo_valid: cfg.id_tipo_valid,
        fecha_valid: resolver_fecha_valid(fecha_valid.as_deref())?,
        usuario_valid: usuario_valid
            .clone()
            .unwrap_or_else(|| cfg.usuario_valid.clone()),
    };

    info(format!("Migrating {} historic rows", base.len()));
    let migracion = pipeline::ejecutar(base, &asignaciones, &maestro, &tablas_bd, &opciones);

    info(format!(
        "{} annotations, {} missing users, {} missing works, {} missing CARGADO A works",
        migracion.anotaciones.len(),
        migracion.usuarios_subir.len(),
        migracion.obras_subir.len(),
        migracion.cargado_a_subir.len(),
    ));

    // ------------- EXPORT -------------
    let tablas = vec![
        tabla_usuarios_subir(&migracion.usuarios_subir),
        tabla_obras_subir("AUX_T_OBRAS_SUBIR_DEBE_CONTENER", &migracion.obras_subir),
        tabla_obras_subir(
            "AUX_T_OBRAS_CARGADO_A_SUBIR_DEBE_CONTENER",
            &migracion.cargado_a_subir,
        ),
        tabla_anotaciones(&migracion.anotaciones),
        tabla_valid(&migracion.valid),
        tabla_base(&migracion.base),
    ];

    let destino = output
        .as_deref()
        .or(cfg.output.as_deref())
        .map(Path::new)
        .unwrap_or(archivos);

    let dir = ExportLogic::exportar(destino, format, migracion.timestamp, &tablas)?;
    success(format!("Migration completed: {}", dir.display()));
    Ok(())
}

/// `--fecha-valid` must be a real DD/MM/YYYY date; default is the run date.
fn resolver_fecha_valid(raw: Option<&str>) -> AppResult<String> {
    match raw {
        None => Ok(chrono::Local::now().format("%d/%m/%Y").to_string()),
        Some(s) => {
            NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
                .map_err(|_| AppError::Config(format!("invalid --fecha-valid '{s}'")))?;
            Ok(s.trim().to_string())
        }
    }
}
