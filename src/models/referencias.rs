//! Canonical reference tables loaded from TABLAS_BD.
//! Loaded once per run and consumed read-only by the pipeline.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Usuario {
    pub id_usuario: String,
    pub nom_usuario: String,
    pub clave_usuario: String,
    pub paga_he: String,
}

#[derive(Debug, Clone)]
pub struct Obra {
    pub clave_obra: String,
    pub nom_obra: String,
}

#[derive(Debug, Clone)]
pub struct Proceso {
    pub id_proceso: String,
}

#[derive(Debug, Clone)]
pub struct Tarea {
    pub cod_tarea: String,
}

/// The four reference tables of the destination database.
#[derive(Debug, Clone)]
pub struct TablasBd {
    pub usuarios: Vec<Usuario>,
    pub obras: Vec<Obra>,
    pub procesos: Vec<Proceso>,
    pub tareas: Vec<Tarea>,
}

impl TablasBd {
    /// Membership set of known employee ids.
    pub fn claves_usuarios(&self) -> HashSet<&str> {
        self.usuarios.iter().map(|u| u.id_usuario.trim()).collect()
    }

    /// Membership set of known work keys.
    pub fn claves_obras(&self) -> HashSet<&str> {
        self.obras.iter().map(|o| o.clave_obra.trim()).collect()
    }

    /// Membership set of known task codes.
    pub fn codigos_tareas(&self) -> HashSet<&str> {
        self.tareas.iter().map(|t| t.cod_tarea.trim()).collect()
    }

    /// Chapa -> PagaHE lookup used to fill `IdTipo`.
    pub fn paga_he_por_chapa(&self) -> HashMap<&str, &str> {
        self.usuarios
            .iter()
            .map(|u| (u.id_usuario.trim(), u.paga_he.as_str()))
            .collect()
    }
}
