// src/graph/path_tree.rs
//! Breadth-first shortest-path trees.
//!
//! A `PathTree` keeps its edges pointing from child to parent, so the parent of
//! a vertex is its single forward neighbor and its children are its backward
//! neighbors. Each tree edge remembers the label slot of the source-graph edge
//! that discovered it.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use super::labeled::{LabelId, LabeledGraph, Neighbors};
use crate::error::GraphError;

/// Shortest-path tree over the vertices reachable from `root`.
#[derive(Debug, Clone)]
pub struct PathTree<V> {
    root: V,
    links: LabeledGraph<V, LabelId>,
}

impl<V> PathTree<V>
where
    V: Eq + Hash + Clone,
{
    #[must_use]
    pub fn root(&self) -> &V {
        &self.root
    }

    #[must_use]
    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.links.has_vertex(v)
    }

    /// The vertex that discovered `v`. `None` for the root and for vertices
    /// outside the tree.
    #[must_use]
    pub fn parent<Q>(&self, v: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.links.out_neighbors(v).ok()?.next()
    }

    /// Vertices discovered by `v`.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is not in the tree.
    pub fn children<Q>(&self, v: &Q) -> Result<Neighbors<'_, V>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.links.in_neighbors(v)
    }

    /// Label of the source-graph edge that connects `child` to its parent.
    ///
    /// `graph` must be the graph this tree was built from.
    #[must_use]
    pub fn label<'g, E, Q>(&self, graph: &'g LabeledGraph<V, E>, child: &Q) -> Option<&'g E>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let parent = self.parent(child)?;
        let slot = self.links.label(child, <V as Borrow<Q>>::borrow(parent)).ok()?;
        Some(graph.label_at(*slot))
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.links.num_vertices()
    }

    /// One edge per non-root vertex.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.links.num_edges()
    }

    /// Tree vertices in discovery order, root first.
    pub fn vertices(&self) -> indexmap::set::Iter<'_, V> {
        self.links.vertices()
    }

    /// The underlying child-to-parent graph.
    #[must_use]
    pub fn links(&self) -> &LabeledGraph<V, LabelId> {
        &self.links
    }
}

/// Builds the breadth-first shortest-path tree of `graph` rooted at `source`.
///
/// Neighbors are explored in adjacency order. When a vertex has several
/// shortest-path predecessors, the first one to reach it becomes its parent;
/// which one that is depends on adjacency order and is not otherwise
/// specified. Path lengths do not depend on it.
///
/// # Errors
/// `VertexNotFound` if `source` is not a vertex of `graph`.
pub fn build<V, E, Q>(graph: &LabeledGraph<V, E>, source: &Q) -> Result<PathTree<V>, GraphError>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let start = graph.index_of(source)?;
    let root = graph.vertex_at(start).clone();

    let mut links = LabeledGraph::new();
    links.insert_vertex(root.clone());

    let mut visited = vec![false; graph.num_vertices()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for (v, slot) in graph.out_links(u) {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            queue.push_back(v);
            links.insert_directed(
                graph.vertex_at(v).clone(),
                graph.vertex_at(u).clone(),
                slot,
            );
        }
    }

    Ok(PathTree { root, links })
}
