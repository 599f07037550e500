//! Row normalization: chapa cleanup and project label splitting.
//!
//! The column rename of the wire contract is handled by the loader (cells are
//! read by workbook header into canonical struct fields); this stage fills in
//! the derived fields every later stage depends on.

use crate::models::registro::Registro;
use crate::utils::text::limpia_chapa;
use regex::Regex;
use std::sync::LazyLock;

/// Digits-inside-parentheses pattern of the PROYECTO label.
static RE_CODIGO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// Fill `chapa`, `proyecto_codigo` and `proyecto_nombre` on every row.
pub fn normaliza(rows: Vec<Registro>) -> Vec<Registro> {
    rows.into_iter()
        .map(|mut r| {
            r.chapa = limpia_chapa(&r.chapa_raw);
            let (codigo, nombre) = desglosa_proyecto(&r.proyecto);
            r.proyecto_codigo = codigo;
            r.proyecto_nombre = nombre;
            r
        })
        .collect()
}

/// Split a PROYECTO label into (code, name).
///
/// `"Metro Lima (4521)"` -> `("4521", "Metro Lima")`. Without a
/// parenthesized number the whole trimmed label is the code, and the name is
/// the label stripped of surrounding spaces and dashes; a plain label
/// therefore lands in both fields, which is accepted source behaviour.
pub fn desglosa_proyecto(label: &str) -> (String, String) {
    let codigo = match RE_CODIGO.captures(label) {
        Some(cap) => cap[1].to_string(),
        None => label.trim().to_string(),
    };
    let nombre = RE_CODIGO
        .replace_all(label, "")
        .trim_matches([' ', '-'])
        .to_string();
    (codigo, nombre)
}

/// Optional policy (see config): drop rows whose chapa failed to clean and
/// became the literal `"nan"`. When kept, those rows surface as a proposed
/// user in AUX_USUARIOS_SUBIR_DEBE_CONTENER instead.
pub fn descartar_chapas_invalidas(rows: Vec<Registro>) -> Vec<Registro> {
    rows.into_iter().filter(|r| r.chapa != "nan").collect()
}
