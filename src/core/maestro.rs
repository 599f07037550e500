//! Master-correction stage: delete obsolete work keys, then rename the
//! survivors and propagate the rename to CARGADO A.

use crate::models::maestro::Maestro;
use crate::models::registro::Registro;

/// Apply the master-correction table to the normalized rows.
///
/// Deletion is evaluated first, on both the project code and the CARGADO A
/// value, so a key marked `borrar` never reaches the rename step. Surviving
/// rows get their resolved `clave_obra` (rename target or the project code
/// itself) and a non-destructive rename of `cargado_a` (absent values stay
/// untouched).
pub fn aplicar_maestro(rows: Vec<Registro>, maestro: &Maestro) -> Vec<Registro> {
    rows.into_iter()
        .filter(|r| !maestro.es_borrada(&r.proyecto_codigo))
        .filter(|r| {
            r.cargado_a
                .as_deref()
                .is_none_or(|c| !maestro.es_borrada(c))
        })
        .map(|mut r| {
            r.clave_obra = maestro.renombrar(&r.proyecto_codigo);
            r.cargado_a = r.cargado_a.take().map(|c| maestro.renombrar(&c));
            r
        })
        .collect()
}
