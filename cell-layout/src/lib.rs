//! Flow and distance models for machine layout problems.
//!
//! A manufacturing cell is described by a set of candidate grid locations, a set of machines
//! and a set of process plans (routes of operations, each running on a machine).
//! This crate turns such a description into a [`FlowMatrix`](eval::FlowMatrix) and a
//! [`DistanceMatrix`](eval::DistanceMatrix) and scores assignments of machines to locations
//! ([`Layout`](entities::Layout)) by their total loaded distance.
//!
//! Searching for good layouts is left to optimizers built on top of this crate.

/// Entities to model the layout problem
pub mod entities;

/// Flow model, distance model and the cost function
pub mod eval;

/// Grid coordinates and distance metrics
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
