use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("7")
        .env_remove("BROADSIDE_ROWS")
        .env_remove("BROADSIDE_COLS")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["won"], true);
    assert_eq!(v["hits"], 13);
    assert_eq!(v["sunk_order"].as_array().map(Vec::len), Some(3));
}
