//! Annotation builder: one T_ANOTACIONES_SUBIR row per surviving base row,
//! with the stable `IdAnot` written back into the base for downstream joins.

use crate::models::anotacion::Anotacion;
use crate::models::referencias::TablasBd;
use crate::models::registro::Registro;
use crate::utils::date::{format_fanotacion, format_timestamp};
use crate::utils::text::parse_horas;
use chrono::NaiveDateTime;

pub struct ParamsAnotaciones {
    /// First IdAnot of the run; ids are dense from here on.
    pub primer_id: i64,
    pub tasa_hora: u32,
    /// Capture time of the export run, shared by FCREA and FMODIFI.
    pub timestamp: NaiveDateTime,
}

/// Build the annotation rows and assign each base row its `IdAnot`.
///
/// For N rows and offset `primer_id` the ids are exactly
/// `primer_id..primer_id + N`, in row order, no gaps.
pub fn construir_anotaciones(
    rows: &mut [Registro],
    tablas: &TablasBd,
    params: &ParamsAnotaciones,
) -> Vec<Anotacion> {
    let paga_he = tablas.paga_he_por_chapa();
    let ts = format_timestamp(params.timestamp);

    rows.iter_mut()
        .enumerate()
        .map(|(i, r)| {
            let id_anot = params.primer_id + i as i64;
            r.id_anot = Some(id_anot);

            Anotacion {
                id_anot,
                id_usuario: r.chapa.clone(),
                f_anotacion: format_fanotacion(r.fecha),
                clave_obra: r.clave_obra.clone(),
                cod_tarea: r.cod_tarea.clone(),
                desc_anot: r.obs.clone(),
                c_horas: parse_horas(&r.horas_raw),
                n_plano: r.nplano.clone(),
                f_crea: ts.clone(),
                id_usuario_c: r.chapa.clone(),
                id_tipo: paga_he.get(r.chapa.as_str()).map(|v| v.to_string()),
                tasa_hora: params.tasa_hora,
                debug_actividad: r.actividad.clone(),
                debug_asignacion: r.asignacion_raw.clone().unwrap_or_default(),
            }
        })
        .collect()
}
