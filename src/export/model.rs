//! Flat table representation for export: one logical name, a header row and
//! string cells. Every output of the pipeline converts into a `TablaExport`
//! so the csv/json/xlsx writers stay format-only.

use crate::core::auxiliares::{ObraSubir, UsuarioSubir};
use crate::models::anotacion::Anotacion;
use crate::models::registro::Registro;
use crate::models::valid::AnotacionValid;

#[derive(Debug, Clone)]
pub struct TablaExport {
    pub nombre: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Render parsed hours; None (unparseable source cell) exports as empty.
fn fmt_horas(h: Option<f64>) -> String {
    match h {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}

pub fn tabla_usuarios_subir(usuarios: &[UsuarioSubir]) -> TablaExport {
    TablaExport {
        nombre: "AUX_USUARIOS_SUBIR_DEBE_CONTENER".to_string(),
        headers: vec!["IdUsuario", "NomUsuario", "ClaveUsuario", "PagaHE"],
        rows: usuarios
            .iter()
            .map(|u| {
                vec![
                    u.id_usuario.clone(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]
            })
            .collect(),
    }
}

pub fn tabla_obras_subir(nombre: &str, obras: &[ObraSubir]) -> TablaExport {
    TablaExport {
        nombre: nombre.to_string(),
        headers: vec!["ClaveObra", "NomObra"],
        rows: obras
            .iter()
            .map(|o| vec![o.clave_obra.clone(), o.nom_obra.clone()])
            .collect(),
    }
}

pub fn tabla_anotaciones(anotaciones: &[Anotacion]) -> TablaExport {
    TablaExport {
        nombre: "T_ANOTACIONES_SUBIR".to_string(),
        headers: vec![
            "IdAnot",
            "Idusuario",
            "FAnotacion",
            "ClaveObra",
            "CodObra",
            "IdProceso",
            "CodTarea",
            "DescAnot",
            "CEuros",
            "CHoras",
            "NPlano",
            "FCREA",
            "FMODIFI",
            "IdUsuarioC",
            "IdTipo",
            "TasaHora",
            "NumModOT",
            "DEBUG_actividad",
            "DEBUG_asignacion",
        ],
        rows: anotaciones
            .iter()
            .map(|a| {
                vec![
                    a.id_anot.to_string(),
                    a.id_usuario.clone(),
                    a.f_anotacion.clone(),
                    a.clave_obra.clone(),
                    String::new(), // CodObra: reserved for the upload process
                    String::new(), // IdProceso: reserved for the upload process
                    a.cod_tarea.clone(),
                    a.desc_anot.clone(),
                    String::new(), // CEuros: computed by the destination
                    fmt_horas(a.c_horas),
                    a.n_plano.clone(),
                    a.f_crea.clone(),
                    a.f_crea.clone(), // FMODIFI mirrors FCREA at migration time
                    a.id_usuario_c.clone(),
                    a.id_tipo.clone().unwrap_or_default(),
                    a.tasa_hora.to_string(),
                    String::new(), // NumModOT: filled by a later process
                    a.debug_actividad.clone(),
                    a.debug_asignacion.clone(),
                ]
            })
            .collect(),
    }
}

pub fn tabla_valid(valid: &[AnotacionValid]) -> TablaExport {
    TablaExport {
        nombre: "T_ANOTACIONES_VALID_SUBIR".to_string(),
        headers: vec![
            "IdAnot",
            "ClaveObra",
            "IdTipoV",
            "FValid",
            "VEuros",
            "VHoras",
            "FCREAV",
            "FMODIFIV",
            "IdUsuarioCV",
            "DctaHoras",
        ],
        rows: valid
            .iter()
            .map(|v| {
                vec![
                    v.id_anot.to_string(),
                    v.clave_obra.clone(),
                    v.id_tipo_v.to_string(),
                    v.f_valid.clone(),
                    "0".to_string(), // VEuros: fixed, validated amounts carry no money
                    fmt_horas(v.v_horas),
                    v.f_creav.clone(),
                    v.f_creav.clone(),
                    v.id_usuario_cv.clone(),
                    "0".to_string(), // DctaHoras: fixed discount-hours flag
                ]
            })
            .collect(),
    }
}

pub fn tabla_base(base: &[Registro]) -> TablaExport {
    TablaExport {
        nombre: "BASE_PROCESADA".to_string(),
        headers: vec![
            "IdAnot",
            "fecha",
            "idusuario",
            "proyecto",
            "proyecto_codigo",
            "proyecto_nombre",
            "actividad",
            "nplano",
            "choras",
            "obs",
            "CARGADO A",
            "CATEGORIA",
            "ClaveObra",
            "CodTarea",
        ],
        rows: base
            .iter()
            .map(|r| {
                vec![
                    r.id_anot.map(|id| id.to_string()).unwrap_or_default(),
                    r.fecha.format("%Y-%m-%d").to_string(),
                    r.chapa.clone(),
                    r.proyecto.clone(),
                    r.proyecto_codigo.clone(),
                    r.proyecto_nombre.clone(),
                    r.actividad.clone(),
                    r.nplano.clone(),
                    r.horas_raw.clone(),
                    r.obs.clone(),
                    r.cargado_a.clone().unwrap_or_default(),
                    r.categoria.clone().unwrap_or_default(),
                    r.clave_obra.clone(),
                    r.cod_tarea.clone(),
                ]
            })
            .collect(),
    }
}
