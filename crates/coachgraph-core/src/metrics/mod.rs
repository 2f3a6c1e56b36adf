//! Graph diagnostics.
//!
//! Summaries used for reporting before and after an infection:
//! - `summarize(graph)`: user/edge/coach/singleton counts and component sizes
//! - `count_with_feature(graph, feature)`
//! - `users_with_feature(graph, feature)`
//!
//! Component sizes are listed in discovery order (smallest member id first).

use crate::engine::graph::{CoachingGraph, Component};

/// Structural overview of a coaching graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSummary {
    pub users: usize,
    pub coaching_edges: usize,
    pub coaches: usize,
    pub singletons: usize,
    pub components: usize,
    pub largest_component: usize,
    pub component_sizes: Vec<usize>,
}

pub fn summarize(graph: &CoachingGraph) -> GraphSummary {
    let component_sizes: Vec<usize> = graph
        .all_connected_components()
        .iter()
        .map(|c| c.len())
        .collect();

    GraphSummary {
        users: graph.len(),
        coaching_edges: graph.edge_count(),
        coaches: graph.users().filter(|u| u.is_coach()).count(),
        singletons: graph.users().filter(|u| u.is_singleton()).count(),
        components: component_sizes.len(),
        largest_component: component_sizes.iter().copied().max().unwrap_or(0),
        component_sizes,
    }
}

/// Number of users that currently have `feature` enabled.
pub fn count_with_feature(graph: &CoachingGraph, feature: &str) -> usize {
    graph.users().filter(|u| u.has_feature(feature)).count()
}

/// Ids of users that currently have `feature` enabled.
pub fn users_with_feature(graph: &CoachingGraph, feature: &str) -> Component {
    graph
        .users()
        .filter(|u| u.has_feature(feature))
        .map(|u| u.id().clone())
        .collect()
}
