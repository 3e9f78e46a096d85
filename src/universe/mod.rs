// src/universe/mod.rs
//! The game context: the cast graph, built once, and the active center.
//!
//! The active center and its path tree travel together inside an immutable
//! [`Snapshot`]. Changing the center builds a complete new snapshot before
//! swapping it in, so a reader never sees a tree rooted somewhere else than
//! the center it was handed with.

pub mod rank;

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::error::QueryError;
use crate::graph::{builder, path_tree, queries, LabeledGraph, PathTree};
use crate::input::Dataset;

/// Movie titles shared by two actors.
pub type Credits = BTreeSet<String>;

/// Actor co-occurrence graph: actor vertices, shared-movie labels.
pub type CastGraph = LabeledGraph<String, Credits>;

/// Summary reported whenever a center is chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterStats {
    pub center: String,
    /// Actors connected to the center, the center excluded.
    pub reachable: usize,
    /// Actors in the whole graph.
    pub total: usize,
    /// `None` when the center has no connections.
    pub average: Option<f64>,
}

/// One hop on the way to the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub actor: String,
    pub costar: String,
    pub movies: Vec<String>,
}

/// A center together with the path tree rooted at it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    tree: PathTree<String>,
    stats: CenterStats,
}

impl Snapshot {
    /// # Errors
    /// `UnknownVertex` if `center` is not an actor of `graph`.
    pub fn build(graph: &CastGraph, center: &str) -> Result<Self, QueryError> {
        let (tree, stats) = set_center(graph, center)?;
        Ok(Self { tree, stats })
    }

    #[must_use]
    pub fn center(&self) -> &str {
        self.tree.root()
    }

    #[must_use]
    pub fn tree(&self) -> &PathTree<String> {
        &self.tree
    }

    #[must_use]
    pub fn stats(&self) -> &CenterStats {
        &self.stats
    }
}

/// Builds the path tree for `center` and summarizes it.
///
/// # Errors
/// `UnknownVertex` if `center` is not an actor of `graph`.
pub fn set_center(
    graph: &CastGraph,
    center: &str,
) -> Result<(PathTree<String>, CenterStats), QueryError> {
    let tree = path_tree::build(graph, center)
        .map_err(|_| QueryError::UnknownVertex(center.to_string()))?;

    let average = match queries::average_separation(&tree, center) {
        Ok(avg) => Some(avg),
        Err(QueryError::UndefinedAverage) => None,
        Err(e) => return Err(e),
    };

    let stats = CenterStats {
        center: center.to_string(),
        reachable: tree.num_edges(),
        total: graph.num_vertices(),
        average,
    };
    Ok((tree, stats))
}

/// One game session over a fixed cast graph.
#[derive(Debug)]
pub struct Universe {
    graph: CastGraph,
    reference: Arc<Snapshot>,
    active: Arc<Snapshot>,
}

impl Universe {
    /// Starts a session centered on `default_center`. That first tree stays
    /// the reference for center rankings for the whole session.
    ///
    /// # Errors
    /// `UnknownVertex` if `default_center` is not in `graph`.
    pub fn new(graph: CastGraph, default_center: &str) -> Result<Self, QueryError> {
        let reference = Arc::new(Snapshot::build(&graph, default_center)?);
        info!(
            "cast graph ready: {} actors, {} directed edges",
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(Self {
            graph,
            active: Arc::clone(&reference),
            reference,
        })
    }

    /// Collapses a loaded dataset into the cast graph and starts a session.
    ///
    /// # Errors
    /// `UnknownVertex` if `default_center` is not one of the dataset's actors.
    pub fn from_dataset(dataset: Dataset, default_center: &str) -> Result<Self, QueryError> {
        let graph = builder::build_graph(dataset.actors, dataset.casts)?;
        Self::new(graph, default_center)
    }

    #[must_use]
    pub fn graph(&self) -> &CastGraph {
        &self.graph
    }

    #[must_use]
    pub fn center(&self) -> &str {
        self.active.center()
    }

    #[must_use]
    pub fn stats(&self) -> &CenterStats {
        self.active.stats()
    }

    /// The active (center, tree) pair. Holders keep a consistent view even
    /// after the center changes.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.active)
    }

    /// The snapshot rooted at the session's default center.
    #[must_use]
    pub fn reference(&self) -> &Snapshot {
        &self.reference
    }

    /// Makes `name` the center. On failure the current center is kept.
    ///
    /// # Errors
    /// `UnknownVertex` if `name` is not an actor.
    pub fn set_center(&mut self, name: &str) -> Result<&CenterStats, QueryError> {
        let next = Snapshot::build(&self.graph, name)?;
        debug!(
            "center -> {name}: {}/{} reachable",
            next.stats.reachable, next.stats.total
        );
        self.active = Arc::new(next);
        Ok(self.active.stats())
    }

    /// Path from `name` to the center, both ends included. Empty when `name`
    /// cannot reach the center.
    ///
    /// # Errors
    /// `UnknownVertex` if `name` is not an actor.
    pub fn path_to(&self, name: &str) -> Result<Vec<String>, QueryError> {
        self.require_actor(name)?;
        Ok(queries::path_to(self.active.tree(), name)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Each hop from `name` to the center with the movies that link it.
    ///
    /// # Errors
    /// `UnknownVertex` if `name` is not an actor.
    pub fn path_steps(&self, name: &str) -> Result<Vec<Hop>, QueryError> {
        self.require_actor(name)?;
        Ok(queries::path_steps(&self.graph, self.active.tree(), name)
            .into_iter()
            .map(|step| Hop {
                actor: step.from.clone(),
                costar: step.to.clone(),
                movies: step.label.iter().cloned().collect(),
            })
            .collect())
    }

    /// Separation of `name` from the center, `None` when unreachable.
    ///
    /// # Errors
    /// `UnknownVertex` if `name` is not an actor.
    pub fn separation_of(&self, name: &str) -> Result<Option<usize>, QueryError> {
        self.require_actor(name)?;
        Ok(queries::separation(self.active.tree(), name))
    }

    /// Actors with infinite separation from the center.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        queries::missing(&self.graph, self.active.tree())
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// Top (`n > 0`) or bottom (`n < 0`) `|n|` centers by average separation,
    /// drawn from the reference universe.
    ///
    /// # Errors
    /// `InvalidRange` if `n` is zero or `|n|` exceeds the reference universe.
    pub fn rank_by_average_separation(&self, n: i64) -> Result<Vec<(String, f64)>, QueryError> {
        rank::by_average_separation(
            &self.graph,
            self.reference.tree(),
            |g, v| path_tree::build(g, v),
            n,
        )
    }

    /// Actors of the active universe with degree in `[low, high]`, most
    /// connected first.
    ///
    /// # Errors
    /// `InvalidRange` if `low > high`.
    pub fn rank_by_degree(&self, low: usize, high: usize) -> Result<Vec<(String, usize)>, QueryError> {
        rank::by_degree(&self.graph, self.active.tree(), low, high)
    }

    /// Actors with separation in `[low, high]` from the center, closest first.
    ///
    /// # Errors
    /// `InvalidRange` if `low > high`.
    pub fn rank_by_separation(&self, low: usize, high: usize) -> Result<Vec<(String, usize)>, QueryError> {
        rank::by_separation(self.active.tree(), low, high)
    }

    fn require_actor(&self, name: &str) -> Result<(), QueryError> {
        if self.graph.has_vertex(name) {
            Ok(())
        } else {
            Err(QueryError::UnknownVertex(name.to_string()))
        }
    }
}
