// src/universe/rank.rs
//! Ranked listings over a cast graph and its path trees.

use std::cmp::Ordering;
use std::hash::Hash;

use log::debug;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::error::{GraphError, QueryError};
use crate::graph::{queries, LabeledGraph, PathTree};

/// Top (`n > 0`) or bottom (`n < 0`) `|n|` vertices by the average separation
/// of the tree that `build` roots at them.
///
/// Candidates are the vertices of `reference`. Each candidate gets a tree of
/// its own, so the candidates are evaluated in parallel. Candidates whose
/// average is undefined are left out.
///
/// # Errors
/// `InvalidRange` if `n` is zero or `|n|` exceeds the reference vertex count.
pub fn by_average_separation<V, E, F>(
    graph: &LabeledGraph<V, E>,
    reference: &PathTree<V>,
    build: F,
    n: i64,
) -> Result<Vec<(V, f64)>, QueryError>
where
    V: Eq + Hash + Clone + Ord + Send + Sync,
    E: Sync,
    F: Fn(&LabeledGraph<V, E>, &V) -> Result<PathTree<V>, GraphError> + Sync,
{
    let count = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
    if count == 0 {
        return Err(QueryError::InvalidRange("count must not be zero".into()));
    }
    if count > reference.num_vertices() {
        return Err(QueryError::InvalidRange(format!(
            "count {count} exceeds the {} ranked actors",
            reference.num_vertices()
        )));
    }

    let candidates: Vec<&V> = graph.vertices().filter(|v| reference.contains(*v)).collect();
    debug!("ranking {} candidate centers", candidates.len());

    let mut scored: Vec<(V, f64)> = candidates
        .par_iter()
        .filter_map(|v| {
            let tree = build(graph, *v).ok()?;
            let avg = queries::average_separation(&tree, *v).ok()?;
            Some(((*v).clone(), avg))
        })
        .collect();

    if n > 0 {
        scored.sort_by(|a, b| by_score(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    } else {
        scored.sort_by(|a, b| by_score(b.1, a.1).then_with(|| a.0.cmp(&b.0)));
    }
    scored.truncate(count);
    Ok(scored)
}

/// Tree vertices whose in-degree in `graph` lies in `[low, high]`, highest
/// degree first.
///
/// # Errors
/// `InvalidRange` if `low > high`.
pub fn by_degree<V, E>(
    graph: &LabeledGraph<V, E>,
    tree: &PathTree<V>,
    low: usize,
    high: usize,
) -> Result<Vec<(V, usize)>, QueryError>
where
    V: Eq + Hash + Clone + Ord,
{
    check_bounds(low, high)?;

    let mut ranked = Vec::new();
    for v in tree.vertices() {
        let degree = graph.in_degree(v)?;
        if (low..=high).contains(&degree) {
            ranked.push((v.clone(), degree));
        }
    }
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(ranked)
}

/// Non-root tree vertices whose separation lies in `[low, high]`, closest
/// first.
///
/// # Errors
/// `InvalidRange` if `low > high`.
pub fn by_separation<V>(tree: &PathTree<V>, low: usize, high: usize) -> Result<Vec<(V, usize)>, QueryError>
where
    V: Eq + Hash + Clone + Ord,
{
    check_bounds(low, high)?;

    let mut ranked: Vec<(V, usize)> = queries::depths(tree)
        .into_iter()
        .filter(|&(_, depth)| depth > 0 && (low..=high).contains(&depth))
        .map(|(v, depth)| (v.clone(), depth))
        .collect();
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    Ok(ranked)
}

fn by_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn check_bounds(low: usize, high: usize) -> Result<(), QueryError> {
    if low > high {
        return Err(QueryError::InvalidRange(format!(
            "low bound {low} is above high bound {high}"
        )));
    }
    Ok(())
}
