//! # Coaching Graph
//!
//! This module implements the directed coaching graph and its weak-connectivity
//! queries.
//!
//! ## Key Components
//!
//! - **UserId**: cheaply clonable user identifier (`Arc<str>`)
//!
//! - **User**: a graph node carrying a feature label set plus the ids it coaches
//!   (outgoing) and the ids it is coached by (incoming)
//!
//! - **CoachingGraph**: owner of every [`User`], keyed by id. Adjacency sets hold
//!   ids only; the graph is the single owner of user data.
//!
//! ## Design
//!
//! - Edges are only created through [`CoachingGraph::add_coaching`], which keeps
//!   both sides of every edge in sync: `s ∈ c.coaches() ⇔ c ∈ s.coached_by()`.
//! - Connectivity ignores direction. Components are recomputed on each call and
//!   never cached, so they always reflect the current graph.
//! - Component order is deterministic: seeds are visited in ascending id order,
//!   so components are listed by their smallest member id.
//!
//! ## Example
//!
//! ```rust,ignore
//! use coachgraph_core::engine::graph::CoachingGraph;
//!
//! let mut graph = CoachingGraph::new();
//! graph.add_user("A");
//! graph.add_user("B");
//! graph.add_coaching("A", "B")?;
//! assert_eq!(graph.connected_component("B")?.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::errors::ExecError;

/// A unique identifier for a user in the coaching graph.
///
/// Backed by `Arc<str>` so adjacency sets and component sets can hold ids
/// without copying string data. Hashes and orders exactly like the underlying
/// `str`, so maps keyed by `UserId` can be queried with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(Arc<str>);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(Arc::from(id))
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId(Arc::from(id))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of user ids forming one weakly connected component (or a class).
pub type Component = BTreeSet<UserId>;

/// A user in the coaching graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    features: BTreeSet<String>,
    /// Users this user coaches (outgoing edges)
    coaches: BTreeSet<UserId>,
    /// Users that coach this user (incoming edges)
    coached_by: BTreeSet<UserId>,
}

impl User {
    /// Creates a user with no features and no coaching relationships.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            features: BTreeSet::new(),
            coaches: BTreeSet::new(),
            coached_by: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// The feature labels currently enabled for this user.
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Adds a feature. Returns `true` if the user did not already have it.
    pub fn add_feature(&mut self, feature: &str) -> bool {
        if self.features.contains(feature) {
            return false;
        }
        self.features.insert(feature.to_string())
    }

    /// Removes a feature. Returns `true` if the user had it.
    pub fn discard_feature(&mut self, feature: &str) -> bool {
        self.features.remove(feature)
    }

    /// The users this user directly coaches.
    pub fn coaches(&self) -> &BTreeSet<UserId> {
        &self.coaches
    }

    /// The users that directly coach this user.
    pub fn coached_by(&self) -> &BTreeSet<UserId> {
        &self.coached_by
    }

    /// Undirected neighbourhood: every id this user coaches or is coached by.
    ///
    /// An id linked in both directions is yielded twice.
    pub fn neighbors(&self) -> impl Iterator<Item = &UserId> {
        self.coaches.iter().chain(self.coached_by.iter())
    }

    /// Whether this user coaches at least one other user.
    pub fn is_coach(&self) -> bool {
        !self.coaches.is_empty()
    }

    /// Whether this user has no coaching relationships in either direction.
    pub fn is_singleton(&self) -> bool {
        self.coaches.is_empty() && self.coached_by.is_empty()
    }
}

/// Directed coaching graph with per-user feature labels.
///
/// Lookups are O(1) through an `FxHashMap`; every query that enumerates users
/// sorts by id first so results never depend on hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachingGraph {
    users: FxHashMap<UserId, User>,
}

impl CoachingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users in the graph.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Adds a user with the given id. Existing users are never overwritten.
    ///
    /// Returns `true` if a new user was inserted.
    pub fn add_user(&mut self, id: impl Into<UserId>) -> bool {
        let id = id.into();
        if self.users.contains_key(&id) {
            return false;
        }
        self.users.insert(id.clone(), User::new(id));
        true
    }

    /// Records that `coach` directly coaches `student`.
    ///
    /// Both endpoints must already exist; the outgoing set of the coach and the
    /// incoming set of the student are updated together.
    pub fn add_coaching(&mut self, coach: &str, student: &str) -> Result<(), ExecError> {
        let coach_id = self.resolve(coach)?;
        let student_id = self.resolve(student)?;

        if let Some(user) = self.users.get_mut(coach) {
            user.coaches.insert(student_id);
        }
        if let Some(user) = self.users.get_mut(student) {
            user.coached_by.insert(coach_id);
        }
        Ok(())
    }

    /// Looks up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Looks up a user by id with mutable access.
    ///
    /// Only feature labels can be changed through the returned reference;
    /// adjacency is private to keep edges consistent.
    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    /// Iterates over all users in unspecified order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// All users sorted by id.
    pub fn users_sorted(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        users
    }

    /// Total number of coaching relationships (directed edges).
    pub fn edge_count(&self) -> usize {
        self.users.values().map(|u| u.coaches.len()).sum()
    }

    /// Returns the canonical id stored in the graph for `id`.
    pub fn resolve(&self, id: &str) -> Result<UserId, ExecError> {
        self.users
            .get_key_value(id)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| ExecError::UnknownUser(id.to_string()))
    }

    /// Returns the weakly connected component containing `seed`.
    ///
    /// Breadth-first search over outgoing and incoming edges alike. Only the
    /// membership of the returned set is meaningful.
    pub fn connected_component(&self, seed: &str) -> Result<Component, ExecError> {
        let (start, _) = self
            .users
            .get_key_value(seed)
            .ok_or_else(|| ExecError::UnknownUser(seed.to_string()))?;
        Ok(self.component_from(start))
    }

    /// Partitions every user into weakly connected components.
    ///
    /// Components are ordered by their smallest member id. Each user appears in
    /// exactly one component.
    pub fn all_connected_components(&self) -> Vec<Component> {
        let mut ids: Vec<&UserId> = self.users.keys().collect();
        ids.sort_unstable();

        let mut assigned: FxHashSet<UserId> = FxHashSet::default();
        let mut components = Vec::new();
        for id in ids {
            if assigned.contains(id) {
                continue;
            }
            let component = self.component_from(id);
            assigned.extend(component.iter().cloned());
            components.push(component);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            users = self.users.len(),
            components = components.len(),
            "computed connected components"
        );

        components
    }

    /// Every user that coaches at least one other user.
    pub fn all_parents(&self) -> BTreeSet<UserId> {
        self.users
            .values()
            .filter(|u| u.is_coach())
            .map(|u| u.id.clone())
            .collect()
    }

    /// Every user with no coaching relationships at all.
    pub fn all_singletons(&self) -> BTreeSet<UserId> {
        self.users
            .values()
            .filter(|u| u.is_singleton())
            .map(|u| u.id.clone())
            .collect()
    }

    /// The class led by `coach`: the coach plus its direct students.
    ///
    /// Transitive students and the coach's own coaches are not included. A user
    /// that coaches nobody forms a class of one.
    pub fn class_of(&self, coach: &str) -> Result<Component, ExecError> {
        let user = self
            .users
            .get(coach)
            .ok_or_else(|| ExecError::UnknownUser(coach.to_string()))?;
        let mut class: Component = user.coaches.iter().cloned().collect();
        class.insert(user.id.clone());
        Ok(class)
    }

    fn component_from<'a>(&'a self, start: &'a UserId) -> Component {
        let mut visited: FxHashSet<&'a UserId> = FxHashSet::default();
        let mut queue: VecDeque<&'a UserId> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            let Some(user) = self.users.get(id) else {
                continue;
            };
            for neighbor in user.neighbors() {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.into_iter().cloned().collect()
    }
}
