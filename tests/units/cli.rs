use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const K4_PENDANT: &str = "c K4 plus a pendant vertex\np edge 5 7\ne 1 2\ne 1 3\ne 1 4\ne 2 3\ne 2 4\ne 3 4\ne 4 5\n";

fn satclique(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_satclique"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn instance(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_cli_prints_maximum_clique() {
    let dir = tempfile::tempdir().unwrap();
    let path = instance(dir.path(), "k4.col", K4_PENDANT);
    let out = satclique(&["-i", path.to_str().unwrap(), "--embedded", "--check-model"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Maximum Clique Size: 4\nVertices: 1 2 3 4\n");
}

#[test]
fn test_cli_zero_vertices_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = instance(dir.path(), "empty.col", "c nothing\np edge 0 0\n");
    let out = satclique(&["-i", path.to_str().unwrap(), "--embedded"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn test_cli_unknown_option_prints_help() {
    let out = satclique(&["--frobnicate"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("USAGE:"));
}

#[test]
fn test_cli_missing_input_fails() {
    let out = satclique(&["--embedded"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--input"));
}

#[test]
fn test_cli_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = instance(dir.path(), "k4.col", K4_PENDANT);
    let path = path.to_str().unwrap();

    // Errors surface through `main` (exit code 1), never as a panic (101).
    for args in [
        vec!["-i", path, "--embedded", "-v", "2"],
        vec!["-i", path, "--embedded", "-t", "1e300"],
        vec!["-i", path, "--embedded", "-t", "0"],
        vec!["-i", path, "--embedded", "-t", "soon"],
        vec!["-i", path, "-s"],
    ] {
        let out = satclique(&args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert_eq!(stdout(&out), "", "{args:?}");
    }
}

#[test]
fn test_cli_malformed_instance_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = instance(dir.path(), "bad.col", "p edge 3 1\ne 1 x\n");
    let out = satclique(&["-i", path.to_str().unwrap(), "--embedded"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[cfg(unix)]
#[test]
fn test_cli_verbosity_echoes_solver_comments() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let solver = dir.path().join("fake.sh");
    fs::write(
        &solver,
        "#!/bin/sh\nprintf 'c fake solver\\ns SATISFIABLE\\nv 1 2 3 0\\n'\nexit 10\n",
    )
    .unwrap();
    fs::set_permissions(&solver, fs::Permissions::from_mode(0o755)).unwrap();
    let path = instance(dir.path(), "triangle.col", "p edge 3 3\ne 1 2\ne 2 3\ne 1 3\n");
    let cnf = dir.path().join("formula.cnf");
    let base = [
        "-i",
        path.to_str().unwrap(),
        "-s",
        solver.to_str().unwrap(),
        "-o",
        cnf.to_str().unwrap(),
    ];

    let loud = satclique(&[&base[..], &["-v", "1"][..]].concat());
    assert!(loud.status.success());
    let text = stdout(&loud);
    assert_eq!(text.matches("c fake solver").count(), 3, "{text}");
    assert!(text.ends_with("Maximum Clique Size: 3\nVertices: 1 2 3\n"));

    let quiet = satclique(&[&base[..], &["-v", "0"][..]].concat());
    assert!(quiet.status.success());
    assert_eq!(stdout(&quiet), "Maximum Clique Size: 3\nVertices: 1 2 3\n");
    assert!(fs::read_to_string(&cnf).unwrap().starts_with("p cnf "));
}
