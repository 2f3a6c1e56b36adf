//! Exact-count infection.
//!
//! Infects precisely `num_users` users using whole components only, so no
//! coach/student pair is ever split. Choosing the components is a subset-sum
//! problem over component sizes, solved by
//! [`find_subset_sum`](crate::engine::subset_sum::find_subset_sum).
//!
//! Components are searched in the configured [`ComponentOrder`]
//! (`LargestFirst` by default, ties in discovery order). The first matching
//! subset in that order is used.

use crate::engine::feature::FeatureUpdate;
use crate::engine::graph::{CoachingGraph, Component};
use crate::engine::infection::{InfectionConfig, InfectionOutcome};
use crate::engine::subset_sum::find_subset_sum;

/// Infects exactly `num_users` users, or nobody.
pub fn exact_limited_infection(
    graph: &mut CoachingGraph,
    feature: &str,
    num_users: usize,
) -> InfectionOutcome {
    exact_limited_infection_with_config(graph, feature, num_users, &InfectionConfig::default())
}

/// [`exact_limited_infection`] with an explicit search order.
pub fn exact_limited_infection_with_config(
    graph: &mut CoachingGraph,
    feature: &str,
    num_users: usize,
    config: &InfectionConfig,
) -> InfectionOutcome {
    let Some(selected) = plan_exact_infection(graph, num_users, config) else {
        #[cfg(feature = "tracing")]
        tracing::info!(num_users, "exact infection infeasible");
        return InfectionOutcome::Infeasible;
    };

    FeatureUpdate::parse(feature).apply(graph, &selected);

    #[cfg(feature = "tracing")]
    tracing::info!(num_users, feature, "exact infection applied");

    InfectionOutcome::Infected(selected)
}

/// Chooses whole components totalling exactly `num_users`, without mutating.
pub fn plan_exact_infection(
    graph: &CoachingGraph,
    num_users: usize,
    config: &InfectionConfig,
) -> Option<Component> {
    let mut components = graph.all_connected_components();
    config.component_order.arrange(&mut components);

    let sizes: Vec<usize> = components.iter().map(|c| c.len()).collect();
    let picks = find_subset_sum(&sizes, num_users)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        components = components.len(),
        chosen = picks.len(),
        "subset-sum search succeeded"
    );

    let mut selected = Component::new();
    for index in picks {
        selected.append(&mut components[index]);
    }
    Some(selected)
}
