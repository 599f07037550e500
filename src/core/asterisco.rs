//! Asterisk disambiguation rules.
//!
//! When the assignment sheet maps an activity to `*`, the task code depends
//! on who logged the hours and under which category. Each known activity is
//! one variant of a closed enum carrying a pure resolution rule over
//! (chapa, categoria); an activity outside the table resolves to nothing and
//! the caller substitutes the pending placeholder.
//!
//! An empty result from a known rule is a deliberate discard ("does not
//! compute"), not an error: those rows stay unresolved for manual review.

use crate::models::categoria::Categoria;

// Chapa sets shared by several rules.
const CHAPAS_UE81: &[&str] = &["10168", "11773", "12591"];
const CHAPAS_A81: &[&str] = &["12705", "14031", "14272"];
const CHAPAS_E81: &[&str] = &["13007", "13831", "13835", "12578"];

const CHAPAS_UEVAR01: &[&str] = &["10168", "11773", "13877", "16276"];
const CHAPAS_A91: &[&str] = &["12705", "13144", "10705", "14031", "14272"];
const CHAPAS_E91: &[&str] = &["13007", "11382", "11782", "12578"];

const CHAPAS_AGG01: &[&str] = &["10705", "12705", "13144", "14031", "14272"];
const CHAPAS_EGG01: &[&str] = &["11382", "11782", "13007", "13788"];

/// One resolution rule per activity known to need disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReglaAsterisco {
    /// IPS-GESTION SUBCONTRATACION
    Ips,
    /// IPA-ADMINISTRACION
    Ipa,
    /// I20-FASE IMPLANTACION UTILLAJES BOGIE ACABADO
    I20,
    /// I30-FASE IMPLANTACION UTILLAJES CAJAS ESTRUCTURA
    I30,
    /// U40-FASE MODIFICACIONES PRODUCTO
    U40,
    /// U80-FASE CIERRE PROYECTO
    U80,
    /// U21-FASE COORDINACION (planos / listado de herramientas)
    U21,
    /// U20-FASE COORDINACION (proceso de fabricación) — same rule as U21
    U20,
    /// F20-FASE FABRICACION UTILLAJES BOGIE ACABADO
    F20,
    /// I10-FASE IMPLANTACION UTILLAJES BOGIE ESTRUCTURA
    I10,
    /// F40-FASE FABRICACION UTILLAJES CAJAS ACABADO
    F40,
    /// F30-FASE FABRICACION UTILLAJES CAJAS ESTRUCTURA
    F30,
    /// U50-FASE PRESERIE 2 INICIO FABRICACION
    U50,
    /// F10-FASE FABRICACION UTILLAJES BOGIE ESTRUCTURA
    F10,
    /// FORMACIÓN
    Formacion,
    /// UH-GESTION DE HERRAMIENTAS
    Uh,
    /// UM-MANTENIMIENTO
    Um,
    /// UV-VERIFICACION DE UTILLAJES
    Uv,
    /// VARIOS
    Varios,
}

impl ReglaAsterisco {
    /// Look up the rule for an activity label (trimmed exact match).
    pub fn por_actividad(actividad: &str) -> Option<Self> {
        use ReglaAsterisco::*;
        match actividad.trim() {
            "IPS-GESTION SUBCONTRATACION" => Some(Ips),
            "IPA-ADMINISTRACION" => Some(Ipa),
            "I20-FASE IMPLANTACION UTILLAJES BOGIE ACABADO" => Some(I20),
            "I30-FASE IMPLANTACION UTILLAJES CAJAS ESTRUCTURA" => Some(I30),
            "U40-FASE MODIFICACIONES PRODUCTO" => Some(U40),
            "U80-FASE CIERRE PROYECTO: Analisis Coste/Mejoras/Incidencias/Utillajes fin de obra" => {
                Some(U80)
            }
            "U21-FASE COORDINACION: Analisis de planos y creación del listado de herramientas" => {
                Some(U21)
            }
            "U20-FASE COORDINACION: Definir proceso fabr. + Reuniones IP/Fabr. + Acta + Informe mejora + Listado utillajes" => {
                Some(U20)
            }
            "F20-FASE FABRICACION UTILLAJES BOGIE ACABADO" => Some(F20),
            "I10-FASE IMPLANTACION UTILLAJES BOGIE ESTRUCTURA" => Some(I10),
            "F40-FASE FABRICACION UTILLAJES CAJAS ACABADO" => Some(F40),
            "F30-FASE FABRICACION UTILLAJES CAJAS ESTRUCTURA" => Some(F30),
            "U50-FASE PRESERIE 2 INICIO FABRICACION" => Some(U50),
            "F10-FASE FABRICACION UTILLAJES BOGIE ESTRUCTURA" => Some(F10),
            "FORMACIÓN" => Some(Formacion),
            "UH-GESTION DE HERRAMIENTAS" => Some(Uh),
            "UM-MANTENIMIENTO" => Some(Um),
            "UV-VERIFICACION DE UTILLAJES" => Some(Uv),
            "VARIOS" => Some(Varios),
            _ => None,
        }
    }

    /// Resolve the task code for one row. Empty string = discard / pending.
    pub fn resolver(&self, chapa: &str, categoria: Categoria) -> &'static str {
        use Categoria::{Procesos, Utillajes};
        use ReglaAsterisco::*;

        match self {
            Ips => match categoria {
                Procesos => {
                    if CHAPAS_UE81.contains(&chapa) {
                        "UE81"
                    } else if CHAPAS_A81.contains(&chapa) {
                        "A81"
                    } else if CHAPAS_E81.contains(&chapa) {
                        "E81"
                    } else {
                        ""
                    }
                }
                Utillajes => {
                    if chapa == "12591" {
                        "UE81"
                    } else if chapa == "11296" || chapa == "12320" {
                        "UT80"
                    } else {
                        ""
                    }
                }
                _ => "",
            },

            Ipa => match categoria {
                Procesos => {
                    if CHAPAS_UEVAR01.contains(&chapa) {
                        "UEVAR01"
                    } else if CHAPAS_A91.contains(&chapa) {
                        "A91"
                    } else if CHAPAS_E91.contains(&chapa) {
                        "E91"
                    } else {
                        ""
                    }
                }
                Utillajes => "UTVAR01",
                _ => "",
            },

            I20 => match categoria {
                Procesos => "A39",
                Utillajes => "UT31",
                _ => "",
            },

            I30 => match categoria {
                Procesos => "UE30",
                _ => "",
            },

            U40 => match categoria {
                Procesos => "UE64",
                Utillajes => {
                    if chapa == "12591" {
                        "UE64"
                    } else {
                        "UT64"
                    }
                }
                _ => "",
            },

            U80 => match categoria {
                Procesos => "UE70",
                Utillajes => "UT30",
                _ => "",
            },

            U21 | U20 => match categoria {
                Procesos => {
                    if chapa == "12705" {
                        "A20"
                    } else {
                        "UE20"
                    }
                }
                Utillajes => {
                    if chapa == "12591" {
                        "UE20"
                    } else {
                        "UT16"
                    }
                }
                _ => "",
            },

            F20 => match categoria {
                Utillajes => match chapa {
                    "11296" => "UT20",
                    "11780" => "UT21",
                    _ => "",
                },
                Procesos => match chapa {
                    "12705" => "A39",
                    "16276" => "UA11",
                    _ => "",
                },
                _ => "",
            },

            I10 => match categoria {
                Procesos => "UE30",
                Utillajes => "UT30",
                _ => "",
            },

            F40 => match categoria {
                Procesos => "A39",
                Utillajes => "UT20",
                _ => "",
            },

            F30 => match categoria {
                Procesos => "UE12",
                Utillajes => "UT22",
                _ => "",
            },

            U50 => match categoria {
                Procesos => "UE50",
                Utillajes => "UT50",
                _ => "",
            },

            F10 => match categoria {
                Procesos => "UE10",
                Utillajes => "UT20",
                _ => "",
            },

            // FORMACIÓN ignores the category: the chapa decides the pool.
            Formacion => {
                if CHAPAS_AGG01.contains(&chapa) {
                    "AGG01"
                } else if CHAPAS_EGG01.contains(&chapa) {
                    "EGG01"
                } else {
                    ""
                }
            }

            Uh => match categoria {
                Procesos => match chapa {
                    "12591" => "UE10",
                    "12705" => "A32",
                    _ => "",
                },
                Utillajes => "UE10",
                _ => "",
            },

            Um => match categoria {
                Procesos => "A39",
                Utillajes => "UT42",
                _ => "",
            },

            Uv => match categoria {
                Procesos => {
                    if chapa == "12705" {
                        "A39"
                    } else {
                        "UE10"
                    }
                }
                Utillajes => {
                    if chapa == "12591" {
                        "UE10"
                    } else {
                        "UT40"
                    }
                }
                _ => "",
            },

            Varios => match categoria {
                Utillajes => "UTVAR01",
                Procesos => "UEVAR01",
                _ => "",
            },
        }
    }
}

/// Task code for a row whose assignment rule is `*`.
///
/// Total over every (activity, chapa, categoria) triple: unknown activities
/// and unmatched branches return the empty string, never an error.
pub fn asignar_tarea_asterisco(actividad: &str, chapa: &str, categoria: Categoria) -> &'static str {
    match ReglaAsterisco::por_actividad(actividad) {
        Some(regla) => regla.resolver(chapa, categoria),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::categoria::Categoria::{Gg, Otra, Procesos, Utillajes};

    #[test]
    fn ips_splits_procesos_by_chapa_pool() {
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "10168", Procesos),
            "UE81"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "14031", Procesos),
            "A81"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "12578", Procesos),
            "E81"
        );
        // not in any pool -> discard
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "00000", Procesos),
            ""
        );
    }

    #[test]
    fn ips_utillajes_special_cases() {
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "12591", Utillajes),
            "UE81"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "11296", Utillajes),
            "UT80"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPS-GESTION SUBCONTRATACION", "10168", Gg),
            ""
        );
    }

    #[test]
    fn ipa_fixed_code_for_utillajes() {
        assert_eq!(
            asignar_tarea_asterisco("IPA-ADMINISTRACION", "13877", Procesos),
            "UEVAR01"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPA-ADMINISTRACION", "10705", Procesos),
            "A91"
        );
        assert_eq!(
            asignar_tarea_asterisco("IPA-ADMINISTRACION", "cualquiera", Utillajes),
            "UTVAR01"
        );
    }

    #[test]
    fn per_category_fixed_rules() {
        let i20 = "I20-FASE IMPLANTACION UTILLAJES BOGIE ACABADO";
        assert_eq!(asignar_tarea_asterisco(i20, "1", Procesos), "A39");
        assert_eq!(asignar_tarea_asterisco(i20, "1", Utillajes), "UT31");
        assert_eq!(asignar_tarea_asterisco(i20, "1", Gg), "");

        let i30 = "I30-FASE IMPLANTACION UTILLAJES CAJAS ESTRUCTURA";
        assert_eq!(asignar_tarea_asterisco(i30, "1", Procesos), "UE30");
        assert_eq!(asignar_tarea_asterisco(i30, "1", Utillajes), "");

        let f30 = "F30-FASE FABRICACION UTILLAJES CAJAS ESTRUCTURA";
        assert_eq!(asignar_tarea_asterisco(f30, "1", Procesos), "UE12");
        assert_eq!(asignar_tarea_asterisco(f30, "1", Utillajes), "UT22");

        let u50 = "U50-FASE PRESERIE 2 INICIO FABRICACION";
        assert_eq!(asignar_tarea_asterisco(u50, "1", Procesos), "UE50");
        assert_eq!(asignar_tarea_asterisco(u50, "1", Utillajes), "UT50");
    }

    #[test]
    fn u40_overrides_utillajes_for_one_chapa() {
        let u40 = "U40-FASE MODIFICACIONES PRODUCTO";
        assert_eq!(asignar_tarea_asterisco(u40, "1", Procesos), "UE64");
        assert_eq!(asignar_tarea_asterisco(u40, "12591", Utillajes), "UE64");
        assert_eq!(asignar_tarea_asterisco(u40, "1", Utillajes), "UT64");
    }

    #[test]
    fn u20_and_u21_share_the_same_rule() {
        let u21 = "U21-FASE COORDINACION: Analisis de planos y creación del listado de herramientas";
        let u20 = "U20-FASE COORDINACION: Definir proceso fabr. + Reuniones IP/Fabr. + Acta + Informe mejora + Listado utillajes";
        for (chapa, cat, esperado) in [
            ("12705", Procesos, "A20"),
            ("10168", Procesos, "UE20"),
            ("12591", Utillajes, "UE20"),
            ("11296", Utillajes, "UT16"),
            ("12705", Gg, ""),
        ] {
            assert_eq!(asignar_tarea_asterisco(u21, chapa, cat), esperado);
            assert_eq!(asignar_tarea_asterisco(u20, chapa, cat), esperado);
        }
    }

    #[test]
    fn f20_only_resolves_listed_chapas() {
        let f20 = "F20-FASE FABRICACION UTILLAJES BOGIE ACABADO";
        assert_eq!(asignar_tarea_asterisco(f20, "11296", Utillajes), "UT20");
        assert_eq!(asignar_tarea_asterisco(f20, "11780", Utillajes), "UT21");
        assert_eq!(asignar_tarea_asterisco(f20, "12705", Procesos), "A39");
        assert_eq!(asignar_tarea_asterisco(f20, "16276", Procesos), "UA11");
        assert_eq!(asignar_tarea_asterisco(f20, "10168", Procesos), "");
    }

    #[test]
    fn formacion_ignores_the_category() {
        assert_eq!(asignar_tarea_asterisco("FORMACIÓN", "13144", Gg), "AGG01");
        assert_eq!(
            asignar_tarea_asterisco("FORMACIÓN", "13788", Procesos),
            "EGG01"
        );
        assert_eq!(asignar_tarea_asterisco("FORMACIÓN", "00000", Otra), "");
    }

    #[test]
    fn uh_um_uv_varios() {
        assert_eq!(
            asignar_tarea_asterisco("UH-GESTION DE HERRAMIENTAS", "12591", Procesos),
            "UE10"
        );
        assert_eq!(
            asignar_tarea_asterisco("UH-GESTION DE HERRAMIENTAS", "12705", Procesos),
            "A32"
        );
        assert_eq!(
            asignar_tarea_asterisco("UH-GESTION DE HERRAMIENTAS", "1", Utillajes),
            "UE10"
        );
        assert_eq!(
            asignar_tarea_asterisco("UM-MANTENIMIENTO", "1", Utillajes),
            "UT42"
        );
        assert_eq!(
            asignar_tarea_asterisco("UV-VERIFICACION DE UTILLAJES", "12705", Procesos),
            "A39"
        );
        assert_eq!(
            asignar_tarea_asterisco("UV-VERIFICACION DE UTILLAJES", "12591", Utillajes),
            "UE10"
        );
        assert_eq!(asignar_tarea_asterisco("VARIOS", "1", Procesos), "UEVAR01");
        assert_eq!(asignar_tarea_asterisco("VARIOS", "1", Utillajes), "UTVAR01");
        assert_eq!(asignar_tarea_asterisco("VARIOS", "1", Otra), "");
    }

    #[test]
    fn unknown_activity_resolves_to_empty() {
        assert_eq!(
            asignar_tarea_asterisco("ACTIVIDAD INVENTADA", "10168", Procesos),
            ""
        );
    }

    #[test]
    fn activity_lookup_trims_the_label() {
        assert_eq!(
            asignar_tarea_asterisco("  VARIOS  ", "1", Procesos),
            "UEVAR01"
        );
    }
}
