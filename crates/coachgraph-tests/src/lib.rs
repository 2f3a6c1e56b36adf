//! Shared fixtures for the coachgraph integration tests.
//!
//! Fixture graphs live in `graphs/` next to this crate's manifest:
//! - `graph1.json`: one coach (A) with three students (4 users, 1 component)
//! - `graph2.json`: a four-level coaching tree rooted at A (9 users, 1 component)
//! - `graph3.json`: the graph2 tree (A-I) plus a second component J-M (13 users)

use std::path::PathBuf;

use coachgraph_core::{storage, CoachingGraph, ExecError};

pub fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("graphs");
    p.push(name);
    p
}

/// Loads `graphs/<name>` into a fresh graph.
pub fn load_fixture(name: &str) -> Result<CoachingGraph, ExecError> {
    storage::load_graph(fixture_path(name))
}

/// Number of users in `graph` that have `feature`.
pub fn count_infected(graph: &CoachingGraph, feature: &str) -> usize {
    coachgraph_core::metrics::count_with_feature(graph, feature)
}
