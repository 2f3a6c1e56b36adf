//! # Coachgraph Core
//!
//! Feature rollout over coaching graphs. Users coach other users; a feature
//! ("infection") should reach coaches and their students together.
//!
//! ## Architecture
//!
//! - **engine**: graph store, connectivity, and the three infection routines
//! - **metrics**: structural summaries for reporting
//! - **storage**: JSON record load/save (feature `serde`, on by default)
//! - **generate**: seeded random graphs for fixtures and benchmarks
//!
//! ## Feature tokens
//!
//! Every infection takes a feature token. `"name"` enables `name` on each
//! selected user; `"!name"` disables it. See [`FeatureUpdate`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coachgraph_core::{limited_infection, CoachingGraph};
//!
//! let mut graph = coachgraph_core::storage::load_graph("graph.json")?;
//! let outcome = limited_infection(&mut graph, "new_ui", 10, 20);
//! if outcome.is_success() {
//!     coachgraph_core::storage::save_graph("graph.json", &graph)?;
//! }
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod generate;
pub mod metrics;
#[cfg(feature = "serde")]
pub mod storage;

// Re-export commonly used types
pub use engine::errors::ExecError;
pub use engine::exact::{exact_limited_infection, exact_limited_infection_with_config};
pub use engine::feature::FeatureUpdate;
pub use engine::graph::{CoachingGraph, Component, User, UserId};
pub use engine::infection::{total_infection, ComponentOrder, InfectionConfig, InfectionOutcome};
pub use engine::limited::{limited_infection, limited_infection_with_config};

/// Weakly connected components of `graph`, ordered by smallest member id.
pub fn all_connected_components(graph: &CoachingGraph) -> Vec<Component> {
    graph.all_connected_components()
}
