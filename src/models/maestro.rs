//! The T_OBRAS_SUBIR master-correction table: which work keys to delete and
//! which to rename before they reach the upload tables.
//!
//! Built once per run from the input sheet and never mutated afterwards.

use std::collections::{HashMap, HashSet};

/// Cell value in `CambiarAObra` that marks a work key for deletion.
pub const MARCA_BORRAR: &str = "borrar";

#[derive(Debug, Clone, Default)]
pub struct Maestro {
    borrar: HashSet<String>,
    cambios: HashMap<String, String>,
}

impl Maestro {
    pub fn nuevo() -> Self {
        Self::default()
    }

    /// Register one correction row (`ClaveObra`, `CambiarAObra`).
    ///
    /// Deletion takes precedence: a key marked `borrar` never enters the
    /// rename map, so it cannot resurface under a new name.
    pub fn agregar(&mut self, clave_obra: &str, cambiar_a: &str) {
        let clave = clave_obra.trim();
        let cambio = cambiar_a.trim();
        if clave.is_empty() || cambio.is_empty() {
            return;
        }
        if cambio.eq_ignore_ascii_case(MARCA_BORRAR) {
            self.borrar.insert(clave.to_string());
        } else {
            self.cambios.insert(clave.to_string(), cambio.to_string());
        }
    }

    pub fn es_borrada(&self, clave: &str) -> bool {
        self.borrar.contains(clave.trim())
    }

    /// Resolved work key: the rename target when a rule matches, otherwise
    /// the key itself.
    pub fn renombrar(&self, clave: &str) -> String {
        let clave = clave.trim();
        match self.cambios.get(clave) {
            Some(nueva) => nueva.clone(),
            None => clave.to_string(),
        }
    }

    pub fn num_borradas(&self) -> usize {
        self.borrar.len()
    }

    pub fn num_cambios(&self) -> usize {
        self.cambios.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrar_is_case_insensitive_and_trimmed() {
        let mut m = Maestro::nuevo();
        m.agregar(" 4500 ", " BORRAR ");
        assert!(m.es_borrada("4500"));
        assert!(m.es_borrada(" 4500 "));
        assert!(!m.es_borrada("4501"));
    }

    #[test]
    fn deleted_key_never_enters_the_rename_map() {
        let mut m = Maestro::nuevo();
        m.agregar("4500", "borrar");
        m.agregar("4500", "9999");
        // the rename is registered, but the key stays marked for deletion
        assert!(m.es_borrada("4500"));

        let mut m2 = Maestro::nuevo();
        m2.agregar("4500", "borrar");
        assert_eq!(m2.num_cambios(), 0);
    }

    #[test]
    fn renombrar_defaults_to_the_original_key() {
        let mut m = Maestro::nuevo();
        m.agregar("4510", "4521");
        assert_eq!(m.renombrar("4510"), "4521");
        assert_eq!(m.renombrar("4499"), "4499");
    }
}
