mod common;
use common::{init_archivos_with_data, ipt, read_table, run_dir, setup_archivos};

#[test]
fn test_missing_users_table_lists_unknown_chapas() {
    let archivos = setup_archivos("aux_users");
    init_archivos_with_data(&archivos);

    ipt()
        .args(["--archivos", archivos.to_str().unwrap(), "migrate"])
        .assert()
        .success();

    let run = run_dir(&archivos);
    let usuarios = read_table(&run, "AUX_USUARIOS_SUBIR_DEBE_CONTENER");

    // 99999 is unknown; the blank chapa surfaces as the literal "nan"
    assert!(usuarios.contains("99999"));
    assert!(usuarios.contains("nan"));
    // known users are not proposed
    assert!(!usuarios.contains("10168"));
    assert!(!usuarios.contains("12705"));
}

#[test]
fn test_missing_works_and_cargado_a_are_disjoint() {
    let archivos = setup_archivos("aux_obras");
    init_archivos_with_data(&archivos);

    ipt()
        .args(["--archivos", archivos.to_str().unwrap(), "migrate"])
        .assert()
        .success();

    let run = run_dir(&archivos);
    let obras = read_table(&run, "AUX_T_OBRAS_SUBIR_DEBE_CONTENER");
    let cargado = read_table(&run, "AUX_T_OBRAS_CARGADO_A_SUBIR_DEBE_CONTENER");

    // unknown project codes are proposed, with their names
    assert!(obras.contains("4521,Metro Lima"));
    assert!(obras.contains("4510,Obra vieja"));
    // existing work 100 is not proposed
    assert!(!obras.contains("100,"));

    // 777 only shows up in the CARGADO A table, with a blank name
    assert!(cargado.contains("777,"));
    assert!(!obras.contains("777"));
    // and nothing already queued as a missing work is repeated there
    assert!(!cargado.contains("4521"));
    assert!(!cargado.contains("4510"));
}

#[test]
fn test_descartar_chapas_invalidas_policy() {
    let archivos = setup_archivos("descartar_nan");
    init_archivos_with_data(&archivos);

    ipt()
        .args([
            "--archivos",
            archivos.to_str().unwrap(),
            "migrate",
            "--descartar-chapas-invalidas",
        ])
        .assert()
        .success();

    let run = run_dir(&archivos);
    let usuarios = read_table(&run, "AUX_USUARIOS_SUBIR_DEBE_CONTENER");
    let anot = read_table(&run, "T_ANOTACIONES_SUBIR");

    // the invalid-chapa row is gone entirely: 4 survivors instead of 5
    assert!(!usuarios.contains("nan"));
    assert!(anot.contains("47003,"));
    assert!(!anot.contains("47004,"));
}

#[test]
fn test_config_check_reports_missing_inputs() {
    let archivos = setup_archivos("config_check");
    // no fixture files on purpose

    ipt()
        .args([
            "--archivos",
            archivos.to_str().unwrap(),
            "config",
            "--check",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("missing"));
}
