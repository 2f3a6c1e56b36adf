//! Feature toggle tokens.
//!
//! Every infection routine applies the same update to the users it selects. A
//! token is either a plain feature name, which enables that feature, or a name
//! prefixed with [`NEGATION_MARKER`], which disables it:
//!
//! - `"login"` adds `login` to each selected user
//! - `"!login"` removes `login` from each selected user
//!
//! Only a single leading marker is stripped, so `"!!x"` removes the feature
//! named `"!x"`.

use std::fmt;

use crate::engine::errors::ExecError;
use crate::engine::graph::{CoachingGraph, UserId};

/// Prefix that turns a feature token into a removal.
pub const NEGATION_MARKER: char = '!';

/// A parsed feature token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureUpdate<'a> {
    /// Enable the named feature.
    Add(&'a str),
    /// Disable the named feature.
    Discard(&'a str),
}

impl<'a> FeatureUpdate<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token.strip_prefix(NEGATION_MARKER) {
            Some(name) => FeatureUpdate::Discard(name),
            None => FeatureUpdate::Add(token),
        }
    }

    /// Like [`FeatureUpdate::parse`], but rejects tokens that name no feature
    /// (`""` and `"!"`).
    pub fn try_parse(token: &'a str) -> Result<Self, ExecError> {
        let update = Self::parse(token);
        if update.name().is_empty() {
            return Err(ExecError::InvalidArgument(format!(
                "feature token '{}' names no feature",
                token
            )));
        }
        Ok(update)
    }

    /// The feature name without the negation marker.
    pub fn name(&self) -> &'a str {
        match *self {
            FeatureUpdate::Add(name) | FeatureUpdate::Discard(name) => name,
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, FeatureUpdate::Discard(_))
    }

    /// Applies the update to each listed user, skipping ids not in the graph.
    ///
    /// Returns the number of users whose feature set actually changed.
    pub fn apply<'i>(
        &self,
        graph: &mut CoachingGraph,
        users: impl IntoIterator<Item = &'i UserId>,
    ) -> usize {
        let mut changed = 0;
        for id in users {
            let Some(user) = graph.user_mut(id.as_str()) else {
                continue;
            };
            let did_change = match *self {
                FeatureUpdate::Add(name) => user.add_feature(name),
                FeatureUpdate::Discard(name) => user.discard_feature(name),
            };
            if did_change {
                changed += 1;
            }
        }
        changed
    }
}

impl fmt::Display for FeatureUpdate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureUpdate::Add(name) => f.write_str(name),
            FeatureUpdate::Discard(name) => write!(f, "{}{}", NEGATION_MARKER, name),
        }
    }
}
