use std::process::{Command, Output};

fn planet_grid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_planet-grid"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to invoke planet-grid binary")
}

#[test]
fn normalize_prints_the_resolved_cell() {
    let output = planet_grid(&["normalize", "--face", "top", "--x", "-1", "--y", "50"]);

    assert!(output.status.success(), "normalize should succeed");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "(west, 99, 50) net (99, 150) edges +x"
    );
}

#[test]
fn felt_residues_accept_hexadecimal() {
    let output = planet_grid(&[
        "--format", "json", "normalize-felt", "--face", "4", "--x", "0xa", "--y", "-1",
    ]);

    assert!(output.status.success(), "normalize-felt should succeed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON report");
    assert_eq!(value["position"]["face"], "North");
    assert_eq!(value["position"]["x"], 99);
    assert_eq!(value["position"]["y"], 89);
}

#[test]
fn oversized_displacement_exits_with_failure() {
    let output = planet_grid(&["normalize", "--face", "top", "--x", "-101", "--y", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("exceeds one face width"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn table_lists_every_edge() {
    let output = planet_grid(&["table"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 24);
}
