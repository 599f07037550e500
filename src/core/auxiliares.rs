//! Missing-reference detection: who and what must exist in the destination
//! before the annotations can be uploaded.
//!
//! All three detectors are pure set differences over the normalized base;
//! first-seen order is preserved so the auxiliary tables stay reviewable.

use crate::models::referencias::{Obra, Usuario};
use crate::models::registro::Registro;
use std::collections::HashSet;

/// Proposed row for AUX_USUARIOS_SUBIR_DEBE_CONTENER. Name, key and rate
/// fields are left blank for the operator to fill in.
#[derive(Debug, Clone)]
pub struct UsuarioSubir {
    pub id_usuario: String,
}

/// Proposed row for the two AUX_T_OBRAS tables.
#[derive(Debug, Clone)]
pub struct ObraSubir {
    pub clave_obra: String,
    pub nom_obra: String,
}

/// Distinct chapas present in the base but absent from T_USUARIOS.
pub fn usuarios_faltantes(rows: &[Registro], usuarios: &[Usuario]) -> Vec<UsuarioSubir> {
    let conocidos: HashSet<&str> = usuarios.iter().map(|u| u.id_usuario.trim()).collect();

    let mut vistos = HashSet::new();
    let mut faltantes = Vec::new();
    for r in rows {
        let chapa = r.chapa.as_str();
        if !conocidos.contains(chapa) && vistos.insert(chapa.to_string()) {
            faltantes.push(UsuarioSubir {
                id_usuario: chapa.to_string(),
            });
        }
    }
    faltantes
}

/// Distinct (code, name) project pairs whose code is absent from T_OBRAS.
pub fn obras_faltantes(rows: &[Registro], obras: &[Obra]) -> Vec<ObraSubir> {
    let conocidas: HashSet<&str> = obras.iter().map(|o| o.clave_obra.trim()).collect();

    let mut vistas = HashSet::new();
    let mut faltantes = Vec::new();
    for r in rows {
        let codigo = r.proyecto_codigo.as_str();
        if conocidas.contains(codigo) {
            continue;
        }
        let par = (codigo.to_string(), r.proyecto_nombre.clone());
        if vistas.insert(par) {
            faltantes.push(ObraSubir {
                clave_obra: codigo.to_string(),
                nom_obra: r.proyecto_nombre.clone(),
            });
        }
    }
    faltantes
}

/// Distinct CARGADO A values covered by neither T_OBRAS nor the works already
/// queued for creation by [`obras_faltantes`]. A value queued once must not
/// be flagged again.
pub fn cargado_a_faltante(
    rows: &[Registro],
    obras: &[Obra],
    obras_subir: &[ObraSubir],
) -> Vec<ObraSubir> {
    let mut cubiertas: HashSet<&str> = obras.iter().map(|o| o.clave_obra.trim()).collect();
    cubiertas.extend(obras_subir.iter().map(|o| o.clave_obra.as_str()));

    let mut vistos = HashSet::new();
    let mut faltantes = Vec::new();
    for r in rows {
        let Some(cargado) = r.cargado_a.as_deref() else {
            continue;
        };
        let cargado = cargado.trim();
        if cargado.is_empty() || cubiertas.contains(cargado) {
            continue;
        }
        if vistos.insert(cargado.to_string()) {
            faltantes.push(ObraSubir {
                clave_obra: cargado.to_string(),
                nom_obra: String::new(),
            });
        }
    }
    faltantes
}
