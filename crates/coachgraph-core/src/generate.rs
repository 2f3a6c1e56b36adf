//! Synthetic coaching graphs for fixtures and benchmarks.
//!
//! Each class gets a fresh coach and a random number of seats. Once the graph
//! is large enough, a seat may be filled by an existing user instead of a new
//! one, which links classes into larger components.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::errors::ExecError;
use crate::engine::graph::{CoachingGraph, UserId};

/// Existing users are only reused once at least this many exist.
pub const MIN_POOL_FOR_REUSE: usize = 100;

/// Shape of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorParams {
    /// Number of classes (and therefore coaches) to create.
    pub num_classes: usize,
    /// Minimum students per class.
    pub min_size: usize,
    /// Maximum students per class.
    pub max_size: usize,
    /// Probability that a seat is filled by an existing user.
    pub existing_rate: f64,
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<(), ExecError> {
        if self.min_size > self.max_size {
            return Err(ExecError::InvalidArgument(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if !(0.0..=1.0).contains(&self.existing_rate) {
            return Err(ExecError::InvalidArgument(format!(
                "existing_rate must be within [0, 1], got {}",
                self.existing_rate
            )));
        }
        Ok(())
    }
}

/// Generates a random coaching graph.
///
/// User ids are consecutive decimal strings starting at `"1"`. The same RNG
/// state always yields the same graph.
pub fn random_coaching_graph<R: Rng>(
    rng: &mut R,
    params: &GeneratorParams,
) -> Result<CoachingGraph, ExecError> {
    params.validate()?;

    let mut graph = CoachingGraph::new();
    let mut pool: Vec<UserId> = Vec::new();
    let mut next_id = 0usize;

    for _ in 0..params.num_classes {
        next_id += 1;
        let coach = UserId::from(next_id.to_string());
        // Reuse candidates are the users that existed before this class.
        let existing = pool.len();
        graph.add_user(coach.clone());

        let class_size = rng.gen_range(params.min_size..=params.max_size);
        let mut class_members = Vec::with_capacity(class_size);
        for _ in 0..class_size {
            let reused = if existing >= MIN_POOL_FOR_REUSE && rng.gen_bool(params.existing_rate) {
                pool[..existing].choose(&mut *rng).cloned()
            } else {
                None
            };
            let student = match reused {
                Some(id) => id,
                None => {
                    next_id += 1;
                    let id = UserId::from(next_id.to_string());
                    graph.add_user(id.clone());
                    class_members.push(id.clone());
                    id
                }
            };
            graph.add_coaching(coach.as_str(), student.as_str())?;
        }

        pool.push(coach);
        pool.extend(class_members);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        classes = params.num_classes,
        users = graph.len(),
        "generated coaching graph"
    );

    Ok(graph)
}
