//! One T_ANOTACIONES_SUBIR output row.
//!
//! Columns that are constant placeholders for the destination system
//! (`CodObra`, `IdProceso`, `CEuros`, `NumModOT`) are emitted by the export
//! model rather than stored here.

#[derive(Debug, Clone)]
pub struct Anotacion {
    /// Dense sequential id, unique per run, one-to-one with the surviving
    /// base rows.
    pub id_anot: i64,
    pub id_usuario: String,
    /// Booking date, `DD/MM/YYYY`.
    pub f_anotacion: String,
    /// Resolved work key after master correction.
    pub clave_obra: String,
    /// Valid task code, `#PENDIENTE#`, or empty (needs review).
    pub cod_tarea: String,
    pub desc_anot: String,
    /// Parsed hours; None when the source cell was not numeric.
    pub c_horas: Option<f64>,
    pub n_plano: String,
    /// Run timestamp, identical in FCREA and FMODIFI.
    pub f_crea: String,
    pub id_usuario_c: String,
    /// PagaHE flag of the matched reference user; None when unmatched.
    pub id_tipo: Option<String>,
    pub tasa_hora: u32,

    // Audit-only columns, kept for traceability to the source sheet
    pub debug_actividad: String,
    pub debug_asignacion: String,
}
