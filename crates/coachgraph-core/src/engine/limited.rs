//! Limited (approximate) infection.
//!
//! Infects a number of users within `[min_users, max_users]`, keeping coaches
//! and students together wherever possible:
//!
//! 1. **Whole components.** Components are packed in [`ComponentOrder`] while the
//!    running total stays within `max_users`, stopping once it reaches
//!    `min_users`.
//! 2. **Classes.** Only if step 1 falls short. Every coach and every isolated
//!    user not yet selected seeds a class: the seed plus its direct students
//!    that are still unselected. Classes are packed the same way.
//!
//! Selection runs on a scratch set. The feature update is applied only when the
//! total reaches `min_users`; otherwise the graph is left untouched.

use crate::engine::feature::FeatureUpdate;
use crate::engine::graph::{CoachingGraph, Component, UserId};
use crate::engine::infection::{ComponentOrder, InfectionConfig, InfectionOutcome};

/// Infects between `min_users` and `max_users` users (inclusive).
///
/// A `min_users` of zero is trivially satisfied and infects nobody. See the
/// module docs for the selection rules and [`FeatureUpdate`] for the meaning of
/// `feature`.
pub fn limited_infection(
    graph: &mut CoachingGraph,
    feature: &str,
    min_users: usize,
    max_users: usize,
) -> InfectionOutcome {
    limited_infection_with_config(
        graph,
        feature,
        min_users,
        max_users,
        &InfectionConfig::default(),
    )
}

/// [`limited_infection`] with an explicit packing order.
pub fn limited_infection_with_config(
    graph: &mut CoachingGraph,
    feature: &str,
    min_users: usize,
    max_users: usize,
    config: &InfectionConfig,
) -> InfectionOutcome {
    let Some(selected) = plan_limited_infection(graph, min_users, max_users, config) else {
        #[cfg(feature = "tracing")]
        tracing::info!(min_users, max_users, "limited infection infeasible");
        return InfectionOutcome::Infeasible;
    };

    FeatureUpdate::parse(feature).apply(graph, &selected);

    #[cfg(feature = "tracing")]
    tracing::info!(
        min_users,
        max_users,
        infected = selected.len(),
        feature,
        "limited infection applied"
    );

    InfectionOutcome::Infected(selected)
}

/// Chooses the users a limited infection would touch, without mutating.
///
/// Returns `None` when no selection within `[min_users, max_users]` was found.
pub fn plan_limited_infection(
    graph: &CoachingGraph,
    min_users: usize,
    max_users: usize,
    config: &InfectionConfig,
) -> Option<Component> {
    if min_users == 0 {
        return Some(Component::new());
    }
    if min_users > graph.len() || min_users > max_users {
        return None;
    }

    let mut selected = Component::new();
    pack_components(graph, &mut selected, min_users, max_users, config.component_order);

    #[cfg(feature = "tracing")]
    tracing::debug!(selected = selected.len(), "component packing finished");

    if selected.len() < min_users {
        pack_classes(graph, &mut selected, min_users, max_users, config.component_order);

        #[cfg(feature = "tracing")]
        tracing::debug!(selected = selected.len(), "class packing finished");
    }

    (selected.len() >= min_users).then_some(selected)
}

fn pack_components(
    graph: &CoachingGraph,
    selected: &mut Component,
    min_users: usize,
    max_users: usize,
    order: ComponentOrder,
) {
    let mut components = graph.all_connected_components();
    order.arrange(&mut components);

    for component in components {
        if selected.len() >= min_users {
            break;
        }
        // Components are disjoint, so the union grows by exactly its size.
        if selected.len() + component.len() <= max_users {
            selected.extend(component);
        }
    }
}

fn pack_classes(
    graph: &CoachingGraph,
    selected: &mut Component,
    min_users: usize,
    max_users: usize,
    order: ComponentOrder,
) {
    let mut seeds: Vec<UserId> = graph
        .all_parents()
        .union(&graph.all_singletons())
        .filter(|id| !selected.contains(*id))
        .cloned()
        .collect();
    if order == ComponentOrder::LargestFirst {
        seeds.sort_by_key(|id| {
            std::cmp::Reverse(graph.user(id.as_str()).map_or(0, |u| u.coaches().len()))
        });
    }

    for seed in &seeds {
        if selected.len() >= min_users {
            break;
        }
        let class = unselected_class(graph, seed, selected);
        if !class.is_empty() && selected.len() + class.len() <= max_users {
            selected.extend(class);
        }
    }
}

/// The seed's class minus users that are already selected.
fn unselected_class(graph: &CoachingGraph, seed: &UserId, selected: &Component) -> Component {
    let Some(user) = graph.user(seed.as_str()) else {
        return Component::new();
    };
    std::iter::once(user.id())
        .chain(user.coaches().iter())
        .filter(|id| !selected.contains(*id))
        .cloned()
        .collect()
}
