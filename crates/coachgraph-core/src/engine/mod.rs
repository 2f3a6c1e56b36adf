//! The infection engine for coaching graphs.
//!
//! This module provides:
//! - **errors**: Error types for graph and infection failures
//! - **graph**: Coaching graph store and weak-connectivity queries
//! - **feature**: The `feature` / `!feature` toggle shared by every routine
//! - **infection**: Shared outcome/config types and total infection
//! - **limited**: Range-bounded infection (components, then classes)
//! - **exact**: Exact-count infection over whole components
//! - **subset_sum**: Iterative subset-sum search used by exact infection

pub mod errors;
pub mod exact;
pub mod feature;
pub mod graph;
pub mod infection;
pub mod limited;
pub mod subset_sum;
