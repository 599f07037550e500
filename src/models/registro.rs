//! One row of the historic *Base Datos* sheet.
//!
//! A `Registro` is created by the loader with the raw cell values and is
//! progressively enriched by the pipeline stages: the normalizer fills in
//! `chapa` and the split project fields, the master-correction resolver fills
//! `clave_obra`, the task resolver fills `cod_tarea`, and the annotation
//! builder assigns `id_anot`. Every stage consumes and returns the row
//! collection, so the ordering of the enrichment is explicit.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Registro {
    // Raw cells, renamed from the wire headers on load
    pub fecha: NaiveDate,
    pub chapa_raw: String,
    pub proyecto: String,
    pub actividad: String,
    pub nplano: String,
    pub horas_raw: String,
    pub obs: String,
    pub cargado_a: Option<String>,
    pub categoria: Option<String>,

    // Filled by the normalizer
    pub chapa: String,
    pub proyecto_codigo: String,
    pub proyecto_nombre: String,

    // Filled by the master-correction resolver
    pub clave_obra: String,

    // Filled by the task resolver
    pub cod_tarea: String,
    pub asignacion_raw: Option<String>,

    // Filled by the annotation builder
    pub id_anot: Option<i64>,
}

impl Registro {
    pub fn nuevo(
        fecha: NaiveDate,
        chapa_raw: String,
        proyecto: String,
        actividad: String,
        nplano: String,
        horas_raw: String,
        obs: String,
        cargado_a: Option<String>,
        categoria: Option<String>,
    ) -> Self {
        Self {
            fecha,
            chapa_raw,
            proyecto,
            actividad,
            nplano,
            horas_raw,
            obs,
            cargado_a,
            categoria,
            chapa: String::new(),
            proyecto_codigo: String::new(),
            proyecto_nombre: String::new(),
            clave_obra: String::new(),
            cod_tarea: String::new(),
            asignacion_raw: None,
            id_anot: None,
        }
    }
}
