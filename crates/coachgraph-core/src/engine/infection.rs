//! Shared infection types and total infection.
//!
//! All three infection routines select a set of users and then apply one
//! [`FeatureUpdate`] to exactly that set. Selection never touches the graph, so
//! a routine that cannot meet its target leaves every user unchanged.

use crate::engine::errors::ExecError;
use crate::engine::feature::FeatureUpdate;
use crate::engine::graph::{CoachingGraph, Component};

/// Result of a limited or exact infection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfectionOutcome {
    /// The feature update was applied to exactly these users.
    Infected(Component),
    /// The target could not be met; the graph was not modified.
    Infeasible,
}

impl InfectionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InfectionOutcome::Infected(_))
    }

    /// The infected users, or `None` when infeasible.
    pub fn infected(&self) -> Option<&Component> {
        match self {
            InfectionOutcome::Infected(users) => Some(users),
            InfectionOutcome::Infeasible => None,
        }
    }

    /// Number of infected users (zero when infeasible).
    pub fn count(&self) -> usize {
        self.infected().map_or(0, |users| users.len())
    }

    pub fn into_infected(self) -> Option<Component> {
        match self {
            InfectionOutcome::Infected(users) => Some(users),
            InfectionOutcome::Infeasible => None,
        }
    }
}

/// Order in which whole components (and classes) are considered for packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentOrder {
    /// Largest first; equal sizes keep discovery order.
    #[default]
    LargestFirst,
    /// The order produced by `all_connected_components` (smallest id first).
    Discovery,
}

impl ComponentOrder {
    /// Reorders components in place. The sort is stable.
    pub fn arrange(self, components: &mut [Component]) {
        if self == ComponentOrder::LargestFirst {
            components.sort_by(|a, b| b.len().cmp(&a.len()));
        }
    }
}

/// Tuning knobs shared by limited and exact infection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfectionConfig {
    pub component_order: ComponentOrder,
}

/// Infects the whole weakly connected component containing `seed`.
///
/// `feature` follows the toggle convention of [`FeatureUpdate`]: a leading `!`
/// removes the feature instead of adding it. Returns the members of the
/// component; every other user is left untouched.
///
/// # Errors
///
/// * `ExecError::UnknownUser` - `seed` is not in the graph
pub fn total_infection(
    graph: &mut CoachingGraph,
    seed: &str,
    feature: &str,
) -> Result<Component, ExecError> {
    let component = graph.connected_component(seed)?;
    let update = FeatureUpdate::parse(feature);
    let changed = update.apply(graph, &component);

    #[cfg(feature = "tracing")]
    tracing::info!(
        seed,
        feature = %update,
        component = component.len(),
        changed,
        "total infection applied"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = changed;

    Ok(component)
}
