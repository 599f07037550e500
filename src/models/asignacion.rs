//! The *asignaciones_tareas* sheet: activity label -> destination task code.

use std::collections::HashMap;

/// Marker in `AsignarATarea` for rows deferred to a separate later process.
pub const MARCA_ESPECIAL: &str = "#ESPECIAL#";

/// What the assignment sheet says to do with one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccionTarea {
    /// Literal destination task code.
    Codigo(String),
    /// `*`: delegate to the asterisk disambiguation rules.
    Asterisco,
    /// `#ESPECIAL#`: leave unresolved on purpose, no placeholder.
    Especial,
}

impl AccionTarea {
    /// Parse an `AsignarATarea` cell. Blank cells yield None (no rule).
    pub fn parse(raw: &str) -> Option<Self> {
        let t = raw.trim();
        if t.is_empty() {
            return None;
        }
        if t == "*" {
            return Some(Self::Asterisco);
        }
        if t.eq_ignore_ascii_case(MARCA_ESPECIAL) {
            return Some(Self::Especial);
        }
        Some(Self::Codigo(t.to_string()))
    }
}

/// One rule of the sheet, keeping the raw cell for the audit columns.
#[derive(Debug, Clone)]
pub struct Asignacion {
    pub raw: String,
    pub accion: AccionTarea,
}

/// Activity label (trimmed) -> assignment rule.
#[derive(Debug, Clone, Default)]
pub struct Asignaciones {
    reglas: HashMap<String, Asignacion>,
}

impl Asignaciones {
    pub fn nueva() -> Self {
        Self::default()
    }

    /// Register one sheet row. Rows with a blank `AsignarATarea` are ignored.
    pub fn agregar(&mut self, tarea: &str, asignar_a: &str) {
        if let Some(accion) = AccionTarea::parse(asignar_a) {
            self.reglas.insert(
                tarea.trim().to_string(),
                Asignacion {
                    raw: asignar_a.trim().to_string(),
                    accion,
                },
            );
        }
    }

    pub fn buscar(&self, actividad: &str) -> Option<&Asignacion> {
        self.reglas.get(actividad.trim())
    }

    pub fn len(&self) -> usize {
        self.reglas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reglas.is_empty()
    }
}
