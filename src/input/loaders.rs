//! Loaders for the reference tables, the historic sheet, and the
//! master-correction table. One CSV file per original workbook sheet.

use crate::errors::AppResult;
use crate::input::sheet::Sheet;
use crate::models::asignacion::Asignaciones;
use crate::models::maestro::Maestro;
use crate::models::referencias::{Obra, Proceso, TablasBd, Tarea, Usuario};
use crate::models::registro::Registro;
use crate::ui::messages::info;
use crate::utils::date::parse_fecha;
use std::path::Path;

// Wire headers of the historic sheet. The chapa header carries a line break
// in the workbook; some CSV exports flatten it to a space, so both spellings
// are accepted.
const COL_FECHA: &str = "FECHA";
const COL_CHAPA: &str = "PERSONA\n(Nº de chapa)";
const COL_CHAPA_PLANA: &str = "PERSONA (Nº de chapa)";
const COL_PROYECTO: &str = "PROYECTO";
const COL_ACTIVIDAD: &str = "ACTIVIDAD/TAREA";
const COL_NPLANO: &str = "CODIGO PLANO";
const COL_HORAS: &str = "HORAS";
const COL_OBS: &str = "OBSERVACIONES";
const COL_CARGADO_A: &str = "CARGADO A";
const COL_CATEGORIA: &str = "CATEGORIA";

/// Load T_USUARIOS, T_OBRAS, T_PROCESOS and T_TAREAS from the TABLAS_BD dir.
pub fn load_tablas_bd(dir: &Path) -> AppResult<TablasBd> {
    info(format!("Loading reference tables from {}", dir.display()));

    let usuarios = load_usuarios(&dir.join("T_USUARIOS.csv"))?;
    let obras = load_obras(&dir.join("T_OBRAS.csv"))?;
    let procesos = load_procesos(&dir.join("T_PROCESOS.csv"))?;
    let tareas = load_tareas(&dir.join("T_TAREAS.csv"))?;

    Ok(TablasBd {
        usuarios,
        obras,
        procesos,
        tareas,
    })
}

fn load_usuarios(path: &Path) -> AppResult<Vec<Usuario>> {
    let sheet = Sheet::read(path, "T_USUARIOS")?;
    let c_id = sheet.col("IdUsuario")?;
    let c_nom = sheet.col("NomUsuario")?;
    let c_clave = sheet.col("ClaveUsuario")?;
    let c_paga = sheet.col("PagaHE")?;

    Ok(sheet
        .rows()
        .iter()
        .map(|r| Usuario {
            id_usuario: sheet.cell(r, c_id).to_string(),
            nom_usuario: sheet.cell(r, c_nom).to_string(),
            clave_usuario: sheet.cell(r, c_clave).to_string(),
            paga_he: sheet.cell(r, c_paga).to_string(),
        })
        .collect())
}

fn load_obras(path: &Path) -> AppResult<Vec<Obra>> {
    let sheet = Sheet::read(path, "T_OBRAS")?;
    let c_clave = sheet.col("ClaveObra")?;
    let c_nom = sheet.col("NomObra")?;

    Ok(sheet
        .rows()
        .iter()
        .map(|r| Obra {
            clave_obra: sheet.cell(r, c_clave).to_string(),
            nom_obra: sheet.cell(r, c_nom).to_string(),
        })
        .collect())
}

fn load_procesos(path: &Path) -> AppResult<Vec<Proceso>> {
    let sheet = Sheet::read(path, "T_PROCESOS")?;
    let c_id = sheet.col("IdProceso")?;

    Ok(sheet
        .rows()
        .iter()
        .map(|r| Proceso {
            id_proceso: sheet.cell(r, c_id).to_string(),
        })
        .collect())
}

fn load_tareas(path: &Path) -> AppResult<Vec<Tarea>> {
    let sheet = Sheet::read(path, "T_TAREAS")?;
    let c_cod = sheet.col("CodTarea")?;

    Ok(sheet
        .rows()
        .iter()
        .map(|r| Tarea {
            cod_tarea: sheet.cell(r, c_cod).to_string(),
        })
        .collect())
}

/// Load the historic *Base Datos* sheet into raw `Registro` rows.
///
/// The column rename of the wire contract happens here: cells are read by
/// their workbook header and land in canonical struct fields. Every contract
/// column must exist, CARGADO A and CATEGORIA included (their cells may be
/// blank per row). A date that fails to parse is fatal for the run.
pub fn load_base(path: &Path) -> AppResult<Vec<Registro>> {
    let sheet = Sheet::read(path, "Base Datos")?;
    info(format!(
        "Loading historic sheet {} ({} rows)",
        path.display(),
        sheet.rows().len()
    ));

    let c_fecha = sheet.col(COL_FECHA)?;
    let c_chapa = match sheet.col_opt(COL_CHAPA) {
        Some(i) => i,
        None => sheet.col(COL_CHAPA_PLANA)?,
    };
    let c_proyecto = sheet.col(COL_PROYECTO)?;
    let c_actividad = sheet.col(COL_ACTIVIDAD)?;
    let c_nplano = sheet.col(COL_NPLANO)?;
    let c_horas = sheet.col(COL_HORAS)?;
    let c_obs = sheet.col(COL_OBS)?;
    let c_cargado = sheet.col(COL_CARGADO_A)?;
    let c_categoria = sheet.col(COL_CATEGORIA)?;

    let mut base = Vec::with_capacity(sheet.rows().len());
    for row in sheet.rows() {
        let fecha = parse_fecha(sheet.cell(row, c_fecha))?;

        // blank cell = the column is present but this row has no value
        let opcional = |idx: usize| -> Option<String> {
            Some(sheet.cell(row, idx))
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.to_string())
        };

        base.push(Registro::nuevo(
            fecha,
            sheet.cell(row, c_chapa).to_string(),
            sheet.cell(row, c_proyecto).to_string(),
            sheet.cell(row, c_actividad).to_string(),
            sheet.cell(row, c_nplano).to_string(),
            sheet.cell(row, c_horas).to_string(),
            sheet.cell(row, c_obs).to_string(),
            opcional(c_cargado),
            opcional(c_categoria),
        ));
    }

    Ok(base)
}

/// Load the *asignaciones_tareas* sheet.
pub fn load_asignaciones(path: &Path) -> AppResult<Asignaciones> {
    let sheet = Sheet::read(path, "asignaciones_tareas")?;
    let c_tarea = sheet.col("Tarea")?;
    let c_asignar = sheet.col("AsignarATarea")?;

    let mut asignaciones = Asignaciones::nueva();
    for row in sheet.rows() {
        asignaciones.agregar(sheet.cell(row, c_tarea), sheet.cell(row, c_asignar));
    }

    info(format!("Loaded {} task assignment rules", asignaciones.len()));
    Ok(asignaciones)
}

/// Load the master-correction table.
pub fn load_maestro(path: &Path) -> AppResult<Maestro> {
    let sheet = Sheet::read(path, "MAESTRO_MODIFICACIONES")?;
    let c_clave = sheet.col("ClaveObra")?;
    let c_cambiar = sheet.col("CambiarAObra")?;

    let mut maestro = Maestro::nuevo();
    for row in sheet.rows() {
        maestro.agregar(sheet.cell(row, c_clave), sheet.cell(row, c_cambiar));
    }

    info(format!(
        "Loaded master corrections: {} deletions, {} renames",
        maestro.num_borradas(),
        maestro.num_cambios()
    ));
    Ok(maestro)
}
