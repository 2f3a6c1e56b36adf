//! JSON persistence for coaching graphs.
//!
//! A graph is stored as a flat record:
//!
//! ```json
//! {
//!   "users": ["A", "B", "C"],
//!   "coaches": { "A": ["B", "C"] },
//!   "features": { "B": ["login"] }
//! }
//! ```
//!
//! `coaches` maps each coach to the users it directly coaches. `features` lists
//! the enabled feature labels per user and is omitted for users without any.
//! Both default to empty when missing. Output is sorted so identical graphs
//! always serialize to identical text.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::errors::ExecError;
use crate::engine::graph::CoachingGraph;

/// Serialized form of a [`CoachingGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingRecord {
    pub users: Vec<String>,
    #[serde(default)]
    pub coaches: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, Vec<String>>,
}

impl CoachingRecord {
    /// Captures users, coaching edges, and feature labels of `graph`.
    pub fn from_graph(graph: &CoachingGraph) -> Self {
        let mut record = CoachingRecord::default();
        for user in graph.users_sorted() {
            let id = user.id().to_string();
            if user.is_coach() {
                record.coaches.insert(
                    id.clone(),
                    user.coaches().iter().map(|s| s.to_string()).collect(),
                );
            }
            if !user.features().is_empty() {
                record
                    .features
                    .insert(id.clone(), user.features().iter().cloned().collect());
            }
            record.users.push(id);
        }
        record
    }

    /// Builds a graph from the record.
    ///
    /// # Errors
    ///
    /// * `ExecError::UnknownUser` - `coaches` or `features` mentions an id that is
    ///   not listed in `users`
    pub fn into_graph(self) -> Result<CoachingGraph, ExecError> {
        let mut graph = CoachingGraph::new();
        for id in self.users {
            graph.add_user(id);
        }
        for (coach, students) in &self.coaches {
            for student in students {
                graph.add_coaching(coach, student)?;
            }
        }
        for (id, labels) in &self.features {
            let user = graph
                .user_mut(id)
                .ok_or_else(|| ExecError::UnknownUser(id.clone()))?;
            for label in labels {
                user.add_feature(label);
            }
        }
        Ok(graph)
    }
}

/// Parses a graph from its JSON record.
pub fn from_json_str(json: &str) -> Result<CoachingGraph, ExecError> {
    let record: CoachingRecord = serde_json::from_str(json)
        .map_err(|e| ExecError::Storage(format!("failed to parse graph record: {}", e)))?;
    record.into_graph()
}

/// Serializes a graph to pretty-printed JSON.
pub fn to_json_string(graph: &CoachingGraph) -> Result<String, ExecError> {
    serde_json::to_string_pretty(&CoachingRecord::from_graph(graph))
        .map_err(|e| ExecError::Storage(format!("failed to serialize graph: {}", e)))
}

/// Reads a graph from a JSON file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<CoachingGraph, ExecError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| ExecError::Storage(format!("failed to read {}: {}", path.display(), e)))?;
    from_json_str(&json)
}

/// Writes a graph to a JSON file, replacing any existing content.
pub fn save_graph(path: impl AsRef<Path>, graph: &CoachingGraph) -> Result<(), ExecError> {
    let path = path.as_ref();
    let json = to_json_string(graph)?;
    fs::write(path, json)
        .map_err(|e| ExecError::Storage(format!("failed to write {}: {}", path.display(), e)))
}
