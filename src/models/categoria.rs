//! CATEGORIA column of the historic sheet.

/// Work category of a time entry, as used by the asterisk rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categoria {
    Procesos,
    Utillajes,
    /// "gg" (gastos generales / overhead)
    Gg,
    /// Anything else, including a blank cell. Rules discard these branches.
    Otra,
}

impl Categoria {
    /// Parse the raw CATEGORIA cell (case-insensitive, trimmed; None = blank).
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("").trim().to_lowercase().as_str() {
            "procesos" => Categoria::Procesos,
            "utillajes" => Categoria::Utillajes,
            "gg" => Categoria::Gg,
            _ => Categoria::Otra,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Procesos => "procesos",
            Categoria::Utillajes => "utillajes",
            Categoria::Gg => "gg",
            Categoria::Otra => "",
        }
    }
}
