// src/graph/mod.rs
//! Labeled graph container and the breadth-first algorithms built on it.

pub mod builder;
pub mod labeled;
pub mod path_tree;
pub mod queries;

pub use builder::{build_graph, MembershipGraph};
pub use labeled::{LabelId, LabeledGraph, Neighbors};
pub use path_tree::PathTree;
pub use queries::Step;
