//! One T_ANOTACIONES_VALID_SUBIR output row.
//!
//! `VEuros` and `DctaHoras` are fixed to zero by the destination contract and
//! emitted by the export model.

#[derive(Debug, Clone)]
pub struct AnotacionValid {
    pub id_anot: i64,
    /// The *original* CARGADO A value of the source row (post master-correction
    /// rename), recovered from the traced base by id. Deliberately not the
    /// resolved ClaveObra used in T_ANOTACIONES_SUBIR.
    pub clave_obra: String,
    pub id_tipo_v: u32,
    /// Validation date applied uniformly to the whole run.
    pub f_valid: String,
    pub v_horas: Option<f64>,
    /// Run timestamp, identical in FCREAV and FMODIFIV.
    pub f_creav: String,
    /// Validating user applied uniformly to the whole run.
    pub id_usuario_cv: String,
}
