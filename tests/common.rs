use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

/// Seven vertices: a loop A-B-F-E-D-C-A plus isolated G.
///
/// BFS from A reaches F as `A B F`; DFS goes the long way, `A C D E F`.
pub const LOOP_GRAPH: &str = "\
# A-B, A-C, B-F, C-D, D-E, E-F; G isolated
7
A
B
C
D
E
F
G
0 1 1 0 0 0 0
1 0 0 0 0 1 0
1 0 0 1 0 0 0
0 0 1 0 1 0 0
0 0 0 1 0 1 0
0 1 0 0 1 0 0
0 0 0 0 0 0 0
";

pub const LOOP_GRAPH_DISPLAY: &str = "\
graph: 7 vertices, 6 edges
A: B C
B: A F
C: A D
D: C E
E: D F
F: B E
G:
";

pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
