#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn ipt() -> Command {
    cargo_bin_cmd!("iptareas")
}

/// Create a unique archivos dir inside the system temp dir, wiping any
/// leftovers from a previous run.
pub fn setup_archivos(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{name}_iptareas_archivos"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(dir.join("TABLAS_BD")).expect("create archivos dir");
    dir
}

pub fn write_file(dir: &Path, rel: &str, content: &str) {
    fs::write(dir.join(rel), content).expect("write fixture file");
}

/// Populate the default fixture dataset used by most tests.
pub fn init_archivos_with_data(dir: &Path) {
    write_file(
        dir,
        "TABLAS_BD/T_USUARIOS.csv",
        "IdUsuario,NomUsuario,ClaveUsuario,PagaHE\n\
         10168,Ane Perez,APZ,1\n\
         12705,Jon Etxeberria,JET,0\n",
    );
    write_file(
        dir,
        "TABLAS_BD/T_OBRAS.csv",
        "ClaveObra,NomObra\n100,Obra existente\n",
    );
    write_file(dir, "TABLAS_BD/T_PROCESOS.csv", "IdProceso\n1\n");
    write_file(
        dir,
        "TABLAS_BD/T_TAREAS.csv",
        "CodTarea\nUE12\nUEVAR01\nA20\n",
    );
    write_file(
        dir,
        "BASE_DATOS.csv",
        "FECHA,PERSONA (Nº de chapa),PROYECTO,ACTIVIDAD/TAREA,CODIGO PLANO,HORAS,OBSERVACIONES,CARGADO A,CATEGORIA\n\
         2024-01-15,10168.0,Metro Lima (4521),DISEÑO,PL-1,8,nota inicial,,\n\
         2024-01-16,12705,Obra vieja (4510),DISEÑO,,\"7,5\",,,\n\
         2024-01-17,99999,Borrada (666),DISEÑO,,8,,,\n\
         2024-01-18,10168,Metro Lima (4521),VARIOS,,8,,777,procesos\n\
         2024-01-19,,Metro Lima (4521),DISEÑO,,8,,,\n\
         2024-01-20,10168,Metro Lima (4521),VARIOS,,4,,,gg\n",
    );
    write_file(
        dir,
        "ASIGNACIONES_TAREAS.csv",
        "Tarea,AsignarATarea\nDISEÑO,UE12\nVARIOS,*\nGESTION OT,#ESPECIAL#\n",
    );
    write_file(
        dir,
        "MAESTRO_MODIFICACIONES.csv",
        "ClaveObra,CambiarAObra\n666,borrar\n4510,100\n",
    );
}

/// The timestamped run directory created by the last migration.
pub fn run_dir(archivos: &Path) -> PathBuf {
    let output = archivos.join("output");
    let mut dirs: Vec<PathBuf> = fs::read_dir(&output)
        .expect("read output dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs.pop().expect("no run directory created")
}

pub fn read_table(run: &Path, nombre: &str) -> String {
    fs::read_to_string(run.join(format!("{nombre}.csv"))).expect("read exported table")
}
