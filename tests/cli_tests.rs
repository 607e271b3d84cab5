//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against small graph files.

mod common;

use common::{graphwalk, write_graph, LOOP_GRAPH, LOOP_GRAPH_DISPLAY};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

#[test]
fn test_no_command_prints_version() {
    graphwalk()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graphwalk "));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .arg("show")
        .arg(&graph)
        .assert()
        .success()
        .stdout(LOOP_GRAPH_DISPLAY);
}

#[test]
fn test_show_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "show"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["size"], 7);
    assert_eq!(json["edges"], 6);
    assert_eq!(json["symmetric"], true);
    assert_eq!(json["vertices"][5]["neighbors"], serde_json::json!([1, 4]));
}

// ============================================================================
// tree
// ============================================================================

#[test]
fn test_tree_bfs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .arg("tree")
        .arg(&graph)
        .assert()
        .success()
        .stdout("A <- -\nB <- A\nC <- A\nD <- C\nE <- F\nF <- B\nG <- -\n");
}

#[test]
fn test_tree_dfs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    // B is pushed by A first, then again by F before it is popped.
    graphwalk()
        .args(["tree", "--strategy", "dfs"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A <- -\nB <- F\nC <- A\nD <- C\nE <- D\nF <- E\nG <- -\n");
}

#[test]
fn test_tree_json_uses_null_sentinel() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "tree", "--source", "6"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["strategy"], "bfs");
    assert_eq!(json["source"], 6);
    assert_eq!(json["reached"], serde_json::json!([6]));
    assert!(json["predecessors"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p.is_null()));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_defaults_bfs_then_dfs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .arg("path")
        .arg(&graph)
        .assert()
        .success()
        .stdout("A B F\nA C D E F\n");
}

#[test]
fn test_path_single_strategy() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--strategy", "dfs", "--destination", "4"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A C D E\n");
}

#[test]
fn test_path_to_source_is_single_label() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--source", "3", "--destination", "3"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("D\nD\n");
}

#[test]
fn test_path_unreachable_is_degenerate() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--destination", "6"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("G\nG\n")
        .stderr(predicate::str::contains("does not reach G"));
}

#[test]
fn test_path_unreachable_quiet() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["--quiet", "path", "--destination", "6"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("G\nG\n")
        .stderr(predicate::str::contains("does not reach").not());
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "path", "--destination", "6"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["strategy"], "bfs");
    assert_eq!(results[1]["strategy"], "dfs");
    assert_eq!(results[0]["found"], false);
    assert_eq!(results[0]["vertices"], serde_json::json!([6]));
}

#[test]
fn test_path_destination_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--destination", "9"])
        .arg(&graph)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "destination vertex 9 out of range (graph has 7 vertices)",
        ));
}

#[test]
fn test_path_source_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--source", "7"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("source vertex 7 out of range"));
}

#[test]
fn test_path_unknown_strategy() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    graphwalk()
        .args(["path", "--strategy", "astar"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown strategy: astar"));
}

#[test]
fn test_json_error_envelope_for_bad_arguments() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "path", "--strategy", "astar"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_strategy");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_json_error_envelope_for_bad_vertex_index() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "path", "--source", "first"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("`first`"));
    assert!(message.contains("vertex index"));
}

#[test]
fn test_json_error_envelope_for_huge_vertex_count() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "huge.dat", "18446744073709551615\nA\n");

    let output = graphwalk()
        .args(["--format", "json", "show"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "parse_error");
}

#[test]
fn test_json_error_envelope_for_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "path", "--destination", "42"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "vertex_out_of_range");
    assert_eq!(json["error"]["code"], 2);
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_classic() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let expected = format!("{}A B F\nA C D E F\n", LOOP_GRAPH_DISPLAY);
    graphwalk()
        .arg("run")
        .arg(&graph)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_run_with_config() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.dat", LOOP_GRAPH);
    let config = dir.path().join("graphwalk.toml");
    fs::write(
        &config,
        "graph = \"graph.dat\"\ndestination = 3\nstrategies = [\"dfs\"]\n",
    )
    .unwrap();

    let expected = format!("{}A C D\n", LOOP_GRAPH_DISPLAY);
    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_run_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.dat", LOOP_GRAPH);

    let output = graphwalk()
        .args(["--format", "json", "run"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["graph"]["size"], 7);
    assert_eq!(json["paths"][0]["labels"], serde_json::json!(["A", "B", "F"]));
    assert_eq!(
        json["paths"][1]["labels"],
        serde_json::json!(["A", "C", "D", "E", "F"])
    );
}

#[test]
fn test_run_unreachable_destination_is_noted() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.dat", LOOP_GRAPH);
    let config = dir.path().join("graphwalk.toml");
    fs::write(&config, "graph = \"graph.dat\"\ndestination = 6\n").unwrap();

    let expected = format!("{}G\nG\n", LOOP_GRAPH_DISPLAY);
    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .assert()
        .success()
        .stdout(expected.clone())
        .stderr(predicate::str::contains("note: bfs from A does not reach G"))
        .stderr(predicate::str::contains("note: dfs from A does not reach G"));

    graphwalk()
        .args(["--quiet", "--config"])
        .arg(&config)
        .arg("run")
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("does not reach").not());
}

#[test]
fn test_run_without_graph_is_usage_error() {
    graphwalk()
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_run_destination_beyond_small_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.dat", "2\nA\nB\n0 1\n1 0\n");

    graphwalk()
        .arg("run")
        .arg(&graph)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("destination vertex 5 out of range"));
}

// ============================================================================
// Graph file errors
// ============================================================================

#[test]
fn test_malformed_graph_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "bad.dat", "2\nA\nB\n0 1\n1 2\n");

    graphwalk()
        .arg("show")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("parse error at line 5"));
}

#[test]
fn test_missing_graph_file_is_failure() {
    let dir = tempdir().unwrap();

    graphwalk()
        .arg("show")
        .arg(dir.path().join("missing.dat"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_asymmetric_graph_warns_when_verbose() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "directed.dat", "2\nA\nB\n0 1\n0 0\n");

    graphwalk()
        .args(["--verbose", "path", "--destination", "1"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A B\nA B\n")
        .stderr(predicate::str::contains("not symmetric"));
}
