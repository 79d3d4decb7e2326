use std::process::Command;

fn algoscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_algoscope"))
}

#[test]
fn cli_trace_prints_json_steps() {
    let output = algoscope()
        .args(["trace", "--algorithm", "bubble", "--input", "5,3,8,1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let trace: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(trace["variant"], "bubble");
    assert_eq!(trace["steps"][0]["comparing"], serde_json::json!([0, 1]));
    assert_eq!(trace["steps"][0]["message"], "Comparing 5 and 3");
}

#[test]
fn cli_list_names_every_variant() {
    let output = algoscope().arg("list").output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    for key in ["bubble", "quick", "merge", "insertion", "selection", "binary", "linear", "bfs", "dfs"] {
        assert!(text.contains(key), "missing {key}");
    }
}

#[test]
fn cli_rejects_unknown_algorithm() {
    let output = algoscope()
        .args(["trace", "--algorithm", "bogo", "--input", "1,2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn cli_play_runs_to_completion() {
    let output = algoscope()
        .args(["play", "--algorithm", "linear", "--input", "4,2", "--target", "2", "--speed", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("found"));
}
