//! Single-pass migration pipeline.
//!
//! Stage order matters and is fixed here: normalization before the project
//! split consumers, the missing-reference detectors on the pre-correction
//! base, deletion before rename inside the master correction, task
//! resolution before the annotation build, and the validation rows last so
//! they can join back on `IdAnot`.

use crate::core::anotaciones::{ParamsAnotaciones, construir_anotaciones};
use crate::core::auxiliares::{
    ObraSubir, UsuarioSubir, cargado_a_faltante, obras_faltantes, usuarios_faltantes,
};
use crate::core::maestro::aplicar_maestro;
use crate::core::normalize::{descartar_chapas_invalidas, normaliza};
use crate::core::tareas::resolver_tareas;
use crate::core::valid::{ParamsValid, construir_valid};
use crate::models::anotacion::Anotacion;
use crate::models::asignacion::Asignaciones;
use crate::models::maestro::Maestro;
use crate::models::referencias::TablasBd;
use crate::models::registro::Registro;
use crate::models::valid::AnotacionValid;
use crate::utils::date::run_timestamp;
use chrono::NaiveDateTime;

pub struct OpcionesMigracion {
    pub primer_id: i64,
    pub tasa_hora: u32,
    /// Drop rows whose chapa cleaned to the literal "nan" instead of letting
    /// them surface in the auxiliary user table.
    pub descartar_chapas_invalidas: bool,
    pub id_tipo_valid: u32,
    pub fecha_valid: String,
    pub usuario_valid: String,
}

/// Everything one run produces, ready for export.
pub struct Migracion {
    pub usuarios_subir: Vec<UsuarioSubir>,
    pub obras_subir: Vec<ObraSubir>,
    pub cargado_a_subir: Vec<ObraSubir>,
    pub anotaciones: Vec<Anotacion>,
    pub valid: Vec<AnotacionValid>,
    /// Surviving base rows, fully enriched, including `IdAnot`.
    pub base: Vec<Registro>,
    /// Capture time of the run, shared by FCREA/FMODIFI and the output dir.
    pub timestamp: NaiveDateTime,
}

pub fn ejecutar(
    base: Vec<Registro>,
    asignaciones: &Asignaciones,
    maestro: &Maestro,
    tablas: &TablasBd,
    opciones: &OpcionesMigracion,
) -> Migracion {
    let timestamp = run_timestamp();

    let mut base = normaliza(base);
    if opciones.descartar_chapas_invalidas {
        base = descartar_chapas_invalidas(base);
    }

    // Auxiliary tables are computed on the pre-correction base: a row later
    // dropped by a `borrar` rule still tells us its user exists.
    let usuarios_subir = usuarios_faltantes(&base, &tablas.usuarios);
    let obras_subir = obras_faltantes(&base, &tablas.obras);
    let cargado_a_subir = cargado_a_faltante(&base, &tablas.obras, &obras_subir);

    let base = aplicar_maestro(base, maestro);
    let mut base = resolver_tareas(base, asignaciones, &tablas.tareas);

    let anotaciones = construir_anotaciones(
        &mut base,
        tablas,
        &ParamsAnotaciones {
            primer_id: opciones.primer_id,
            tasa_hora: opciones.tasa_hora,
            timestamp,
        },
    );

    let valid = construir_valid(
        &anotaciones,
        &base,
        &ParamsValid {
            id_tipo_v: opciones.id_tipo_valid,
            f_valid: opciones.fecha_valid.clone(),
            id_usuario_cv: opciones.usuario_valid.clone(),
            timestamp,
        },
    );

    Migracion {
        usuarios_subir,
        obras_subir,
        cargado_a_subir,
        anotaciones,
        valid,
        base,
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tareas::PENDIENTE;
    use crate::models::referencias::{Obra, Proceso, Tarea, Usuario};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn registro(
        chapa_raw: &str,
        proyecto: &str,
        actividad: &str,
        cargado_a: Option<&str>,
        categoria: Option<&str>,
    ) -> Registro {
        Registro::nuevo(
            NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
            chapa_raw.to_string(),
            proyecto.to_string(),
            actividad.to_string(),
            String::new(),
            "8".to_string(),
            String::new(),
            cargado_a.map(str::to_string),
            categoria.map(str::to_string),
        )
    }

    fn tablas() -> TablasBd {
        TablasBd {
            usuarios: vec![Usuario {
                id_usuario: "10168".to_string(),
                nom_usuario: String::new(),
                clave_usuario: String::new(),
                paga_he: "1".to_string(),
            }],
            obras: vec![Obra {
                clave_obra: "100".to_string(),
                nom_obra: "Existente".to_string(),
            }],
            procesos: Vec::<Proceso>::new(),
            tareas: vec![
                Tarea {
                    cod_tarea: "UEVAR01".to_string(),
                },
                Tarea {
                    cod_tarea: "UE12".to_string(),
                },
            ],
        }
    }

    fn asignaciones() -> Asignaciones {
        let mut a = Asignaciones::nueva();
        a.agregar("VARIOS", "*");
        a.agregar("DISEÑO", "UE12");
        a
    }

    fn opciones() -> OpcionesMigracion {
        OpcionesMigracion {
            primer_id: 47000,
            tasa_hora: 80,
            descartar_chapas_invalidas: false,
            id_tipo_valid: 1,
            fecha_valid: "31/12/2024".to_string(),
            usuario_valid: "0".to_string(),
        }
    }

    #[test]
    fn full_run_wires_the_stages_together() {
        let mut maestro = Maestro::nuevo();
        maestro.agregar("666", "borrar");
        maestro.agregar("4510", "4521");

        let base = vec![
            registro("10168.0", "Obra vieja (4510)", "DISEÑO", Some("4510"), None),
            registro("99999", "Borrada (666)", "DISEÑO", None, None),
            registro("10168", "Nueva (200)", "VARIOS", Some("777"), Some("procesos")),
        ];

        let out = ejecutar(base, &asignaciones(), &maestro, &tablas(), &opciones());

        // row with the deleted work is gone, ids are dense from 47000
        assert_eq!(out.anotaciones.len(), 2);
        assert_eq!(out.anotaciones[0].id_anot, 47000);
        assert_eq!(out.anotaciones[1].id_anot, 47001);

        // rename applied to ClaveObra and propagated to CARGADO A
        assert_eq!(out.anotaciones[0].clave_obra, "4521");
        assert_eq!(out.valid[0].clave_obra, "4521");
        assert_eq!(out.anotaciones[1].clave_obra, "200");
        assert_eq!(out.valid[1].clave_obra, "777");

        // aux tables computed before the maestro filter: 99999 still shows up
        assert!(
            out.usuarios_subir
                .iter()
                .any(|u| u.id_usuario == "99999")
        );

        // cargado_a 777 is neither existing nor queued as a missing work
        assert!(
            out.cargado_a_subir
                .iter()
                .any(|o| o.clave_obra == "777")
        );

        // round-trip: annotation ids == valid ids == base ids
        let ids_anot: HashSet<i64> = out.anotaciones.iter().map(|a| a.id_anot).collect();
        let ids_valid: HashSet<i64> = out.valid.iter().map(|v| v.id_anot).collect();
        let ids_base: HashSet<i64> = out.base.iter().filter_map(|r| r.id_anot).collect();
        assert_eq!(ids_anot, ids_valid);
        assert_eq!(ids_anot, ids_base);
    }

    #[test]
    fn referential_integrity_of_task_codes() {
        let base = vec![
            registro("10168", "Obra (1)", "VARIOS", None, Some("procesos")),
            registro("10168", "Obra (1)", "VARIOS", None, Some("gg")),
            registro("10168", "Obra (1)", "SIN REGLA", None, None),
        ];
        let out = ejecutar(
            base,
            &asignaciones(),
            &Maestro::nuevo(),
            &tablas(),
            &opciones(),
        );

        let codigos: HashSet<&str> = ["UEVAR01", "UE12"].into();
        for a in &out.anotaciones {
            assert!(
                a.cod_tarea.is_empty()
                    || a.cod_tarea == PENDIENTE
                    || codigos.contains(a.cod_tarea.as_str())
            );
        }
        assert_eq!(out.anotaciones[1].cod_tarea, PENDIENTE);
        assert_eq!(out.anotaciones[2].cod_tarea, "");
    }

    #[test]
    fn invalid_chapa_policy_drop_vs_keep() {
        let base = || {
            vec![
                registro("", "Obra (1)", "DISEÑO", None, None),
                registro("10168", "Obra (1)", "DISEÑO", None, None),
            ]
        };

        let keep = ejecutar(
            base(),
            &asignaciones(),
            &Maestro::nuevo(),
            &tablas(),
            &opciones(),
        );
        assert_eq!(keep.anotaciones.len(), 2);
        assert!(keep.usuarios_subir.iter().any(|u| u.id_usuario == "nan"));

        let mut opts = opciones();
        opts.descartar_chapas_invalidas = true;
        let drop = ejecutar(
            base(),
            &asignaciones(),
            &Maestro::nuevo(),
            &tablas(),
            &opts,
        );
        assert_eq!(drop.anotaciones.len(), 1);
        assert!(drop.usuarios_subir.is_empty());
    }
}
