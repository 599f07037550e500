//! Validation-row builder: one T_ANOTACIONES_VALID_SUBIR row per annotation.
//!
//! The work key here is the CARGADO A value of the traced base row, joined
//! back by `IdAnot` — not the resolved ClaveObra the annotation carries. The
//! asymmetry is inherited from the destination contract and preserved as-is.

use crate::models::anotacion::Anotacion;
use crate::models::registro::Registro;
use crate::models::valid::AnotacionValid;
use crate::utils::date::format_timestamp;
use chrono::NaiveDateTime;
use std::collections::HashMap;

pub struct ParamsValid {
    pub id_tipo_v: u32,
    /// Validation date applied uniformly to every row.
    pub f_valid: String,
    /// Validating user applied uniformly to every row.
    pub id_usuario_cv: String,
    pub timestamp: NaiveDateTime,
}

pub fn construir_valid(
    anotaciones: &[Anotacion],
    base: &[Registro],
    params: &ParamsValid,
) -> Vec<AnotacionValid> {
    // IdAnot -> original CARGADO A; missing lookups default to empty string.
    let cargado_a: HashMap<i64, &str> = base
        .iter()
        .filter_map(|r| {
            r.id_anot
                .map(|id| (id, r.cargado_a.as_deref().unwrap_or("")))
        })
        .collect();

    let ts = format_timestamp(params.timestamp);

    anotaciones
        .iter()
        .map(|a| AnotacionValid {
            id_anot: a.id_anot,
            clave_obra: cargado_a.get(&a.id_anot).copied().unwrap_or("").to_string(),
            id_tipo_v: params.id_tipo_v,
            f_valid: params.f_valid.clone(),
            v_horas: a.c_horas,
            f_creav: ts.clone(),
            id_usuario_cv: params.id_usuario_cv.clone(),
        })
        .collect()
}
