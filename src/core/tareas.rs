//! Task-code resolution: activity label -> CodTarea via the assignment sheet,
//! delegating `*` rows to the asterisk rules and checking the result against
//! the task catalog.

use crate::core::asterisco::asignar_tarea_asterisco;
use crate::models::asignacion::{AccionTarea, Asignaciones};
use crate::models::categoria::Categoria;
use crate::models::referencias::Tarea;
use crate::models::registro::Registro;
use std::collections::HashSet;

/// Placeholder for `*` rows the asterisk rules could not decide. Kept
/// distinguishable from both valid codes and plain-empty rows so reviewers
/// can filter for it.
pub const PENDIENTE: &str = "#PENDIENTE#";

/// Resolve `cod_tarea` on every row.
///
/// - no assignment rule -> empty code, flagged for manual review;
/// - `*` -> asterisk rules; an empty result becomes [`PENDIENTE`];
/// - `#ESPECIAL#` -> empty on purpose, deferred to a later process;
/// - literal -> the code itself.
///
/// Afterwards any non-empty, non-placeholder code missing from T_TAREAS is
/// demoted back to empty: referential integrity degrades to "needs review"
/// instead of failing the run.
pub fn resolver_tareas(
    rows: Vec<Registro>,
    asignaciones: &Asignaciones,
    tareas: &[Tarea],
) -> Vec<Registro> {
    let catalogo: HashSet<&str> = tareas.iter().map(|t| t.cod_tarea.trim()).collect();

    rows.into_iter()
        .map(|mut r| {
            let codigo = match asignaciones.buscar(&r.actividad) {
                None => String::new(),
                Some(asignacion) => {
                    r.asignacion_raw = Some(asignacion.raw.clone());
                    match &asignacion.accion {
                        AccionTarea::Codigo(c) => c.clone(),
                        AccionTarea::Especial => String::new(),
                        AccionTarea::Asterisco => {
                            let categoria = Categoria::parse(r.categoria.as_deref());
                            let resuelto =
                                asignar_tarea_asterisco(&r.actividad, &r.chapa, categoria);
                            if resuelto.is_empty() {
                                PENDIENTE.to_string()
                            } else {
                                resuelto.to_string()
                            }
                        }
                    }
                }
            };

            r.cod_tarea = if codigo.is_empty()
                || codigo == PENDIENTE
                || catalogo.contains(codigo.as_str())
            {
                codigo
            } else {
                String::new()
            };
            r
        })
        .collect()
}
