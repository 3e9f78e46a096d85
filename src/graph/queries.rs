// src/graph/queries.rs
//! Questions answered from a previously built path tree.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use super::labeled::LabeledGraph;
use super::path_tree::PathTree;
use crate::error::QueryError;

/// One hop of a reconstructed path, with the label that justifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a, V, E> {
    pub from: &'a V,
    pub to: &'a V,
    pub label: &'a E,
}

/// Walks parent links from `v` up to the root.
///
/// Returns `[v, parent, .., root]`, or an empty path when `v` is not in the
/// tree. For the root itself the path is `[root]`.
#[must_use]
pub fn path_to<'t, V, Q>(tree: &'t PathTree<V>, v: &Q) -> Vec<&'t V>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let links = tree.links();
    let Ok(mut current) = links.index_of(v) else {
        return Vec::new();
    };

    let mut path = vec![links.vertex_at(current)];
    while let Some((parent, _)) = links.out_links(current).next() {
        path.push(links.vertex_at(parent));
        current = parent;
    }
    path
}

/// Edge count from `v` to the root, `None` when `v` is unreachable.
#[must_use]
pub fn separation<V, Q>(tree: &PathTree<V>, v: &Q) -> Option<usize>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    path_to(tree, v).len().checked_sub(1)
}

/// Like `path_to`, but yields each hop together with its source-graph label.
#[must_use]
pub fn path_steps<'a, V, E, Q>(
    graph: &'a LabeledGraph<V, E>,
    tree: &'a PathTree<V>,
    v: &Q,
) -> Vec<Step<'a, V, E>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    path_to(tree, v)
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let label = tree.label::<E, V>(graph, from)?;
            Some(Step { from, to, label })
        })
        .collect()
}

/// Vertices of `graph` that the tree never reached, in graph order.
#[must_use]
pub fn missing<'g, V, E>(graph: &'g LabeledGraph<V, E>, tree: &PathTree<V>) -> Vec<&'g V>
where
    V: Eq + Hash + Clone,
{
    graph.vertices().filter(|v| !tree.contains(*v)).collect()
}

/// Depth of every tree vertex, root first, in breadth-first order.
#[must_use]
pub fn depths<V>(tree: &PathTree<V>) -> Vec<(&V, usize)>
where
    V: Eq + Hash + Clone,
{
    let links = tree.links();
    let Ok(root) = links.index_of(tree.root()) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(links.num_vertices());
    let mut queue = VecDeque::from([(root, 0)]);
    while let Some((idx, depth)) = queue.pop_front() {
        out.push((links.vertex_at(idx), depth));
        queue.extend(links.in_links(idx).map(|child| (child, depth + 1)));
    }
    out
}

/// Mean depth of the non-root vertices of a tree rooted at `root`.
///
/// The sum of depths is gathered in one pass that weights each vertex's child
/// count by the level those children sit on. The pass keeps its own stack, so
/// chain-shaped trees of any depth are fine.
///
/// # Errors
/// `UndefinedAverage` when the tree has no edges; `Graph` when `root` is not
/// a tree vertex; `InvalidRange` when `root` is a tree vertex other than the
/// tree's root.
#[allow(clippy::cast_precision_loss)]
pub fn average_separation<V, Q>(tree: &PathTree<V>, root: &Q) -> Result<f64, QueryError>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let links = tree.links();
    let start = links.index_of(root)?;
    if start != links.index_of::<V>(tree.root())? {
        return Err(QueryError::InvalidRange(
            "average separation is measured from the tree root".into(),
        ));
    }
    let edges = links.num_edges();
    if edges == 0 {
        return Err(QueryError::UndefinedAverage);
    }
    debug_assert_eq!(
        edges,
        links.num_vertices() - 1,
        "path tree must hold exactly one edge per non-root vertex"
    );

    let total = weighted_levels(links, start, 1);
    Ok(total as f64 / edges as f64)
}

fn weighted_levels<V, E>(links: &LabeledGraph<V, E>, start: usize, level: usize) -> usize
where
    V: Eq + Hash,
{
    let mut sum = 0;
    let mut pending: Vec<(usize, usize)> = vec![(start, level)];
    while let Some((idx, level)) = pending.pop() {
        let before = pending.len();
        pending.extend(links.in_links(idx).map(|child| (child, level + 1)));
        sum += level * (pending.len() - before);
    }
    sum
}
