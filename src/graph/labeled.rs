// src/graph/labeled.rs
//! A generic directed graph whose edges carry labels.
//!
//! Vertices are interned into dense indices and adjacency is stored per index,
//! forward and backward independently. Labels live in an arena; an undirected
//! insertion stores its label once and points both directed edges at the same
//! slot, so a mutation through one direction is visible from the other.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::error::GraphError;

/// Handle of a label slot inside one graph's label arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(usize);

#[derive(Debug, Clone, Default)]
struct Adjacency {
    /// Target index -> label slot of the edge `self -> target`.
    out: IndexMap<usize, LabelId>,
    /// Source index -> label slot of the edge `source -> self`.
    inc: IndexMap<usize, LabelId>,
}

/// A labeled directed graph with optional symmetric (undirected) insertion.
///
/// Adjacency is kept in insertion order, so traversals over the same graph
/// instance always enumerate neighbors identically.
#[derive(Debug, Clone)]
pub struct LabeledGraph<V, E> {
    vertices: IndexSet<V>,
    adjacency: Vec<Adjacency>,
    labels: Vec<E>,
    edges: usize,
}

impl<V, E> Default for LabeledGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: IndexSet::new(),
            adjacency: Vec::new(),
            labels: Vec::new(),
            edges: 0,
        }
    }
}

impl<V, E> LabeledGraph<V, E>
where
    V: Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `v` if absent. Inserting an existing vertex is a no-op.
    pub fn insert_vertex(&mut self, v: V) {
        self.intern(v);
    }

    /// Creates or overwrites the directed edge `a -> b`, adding missing endpoints.
    ///
    /// Overwriting a one-way edge replaces its label in place. Overwriting one
    /// half of an undirected pair gives `a -> b` a fresh label slot, and the
    /// reverse edge keeps the old label.
    pub fn insert_directed(&mut self, a: V, b: V, label: E) {
        let from = self.intern(a);
        let to = self.intern(b);
        let existing = self.adjacency[from].out.get(&to).copied();
        let reverse = self.adjacency[to].out.get(&from).copied();
        match existing {
            Some(LabelId(slot)) if existing != reverse => self.labels[slot] = label,
            _ => {
                let slot = self.push_label(label);
                self.link(from, to, slot);
            }
        }
    }

    /// Creates `a -> b` and `b -> a` sharing one label, adding missing endpoints.
    ///
    /// # Errors
    /// Returns `EdgeExists` if an edge already joins the pair in either
    /// direction; the graph is left untouched.
    pub fn insert_undirected(&mut self, a: V, b: V, label: E) -> Result<(), GraphError> {
        if self.has_edge(&a, &b) || self.has_edge(&b, &a) {
            return Err(GraphError::EdgeExists);
        }
        let x = self.intern(a);
        let y = self.intern(b);
        let slot = self.push_label(label);
        self.link(x, y, slot);
        self.link(y, x, slot);
        Ok(())
    }

    #[must_use]
    pub fn has_vertex<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.contains(v)
    }

    /// Direction-sensitive: queries `a -> b` only.
    #[must_use]
    pub fn has_edge<Q>(&self, a: &Q, b: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_slot(a, b).is_ok()
    }

    /// Returns the label on `a -> b`.
    ///
    /// # Errors
    /// `VertexNotFound` if either endpoint is absent, `EdgeNotFound` otherwise.
    pub fn label<Q>(&self, a: &Q, b: &Q) -> Result<&E, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.edge_slot(a, b)?;
        Ok(self.label_at(slot))
    }

    /// Mutable access to the label on `a -> b`. For an undirected pair this is
    /// the same label that `b -> a` reports.
    ///
    /// # Errors
    /// `VertexNotFound` if either endpoint is absent, `EdgeNotFound` otherwise.
    pub fn label_mut<Q>(&mut self, a: &Q, b: &Q) -> Result<&mut E, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let LabelId(slot) = self.edge_slot(a, b)?;
        self.labels.get_mut(slot).ok_or(GraphError::EdgeNotFound)
    }

    /// Returns the label slot of `a -> b`, a stable handle for this graph.
    ///
    /// # Errors
    /// `VertexNotFound` if either endpoint is absent, `EdgeNotFound` otherwise.
    pub fn edge_slot<Q>(&self, a: &Q, b: &Q) -> Result<LabelId, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        self.adjacency[from]
            .out
            .get(&to)
            .copied()
            .ok_or(GraphError::EdgeNotFound)
    }

    /// Vertices reachable by one forward edge.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn out_neighbors<Q>(&self, v: &Q) -> Result<Neighbors<'_, V>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index_of(v)?;
        Ok(Neighbors {
            vertices: &self.vertices,
            ids: self.adjacency[idx].out.keys(),
        })
    }

    /// Vertices with an edge pointing into `v`.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn in_neighbors<Q>(&self, v: &Q) -> Result<Neighbors<'_, V>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index_of(v)?;
        Ok(Neighbors {
            vertices: &self.vertices,
            ids: self.adjacency[idx].inc.keys(),
        })
    }

    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn out_degree<Q>(&self, v: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ok(self.adjacency[self.index_of(v)?].out.len())
    }

    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn in_degree<Q>(&self, v: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ok(self.adjacency[self.index_of(v)?].inc.len())
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Directed edge count: an undirected pair contributes 2.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> indexmap::set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Resolves a slot handed out by `edge_slot`.
    ///
    /// # Panics
    /// Panics if `slot` was issued by a different graph.
    #[must_use]
    pub fn label_at(&self, slot: LabelId) -> &E {
        &self.labels[slot.0]
    }

    pub(crate) fn index_of<Q>(&self, v: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices
            .get_index_of(v)
            .ok_or(GraphError::VertexNotFound)
    }

    #[allow(clippy::indexing_slicing)] // Guarded: indices come from this graph's own interner
    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub(crate) fn out_links(&self, idx: usize) -> impl Iterator<Item = (usize, LabelId)> + '_ {
        self.adjacency[idx].out.iter().map(|(&to, &slot)| (to, slot))
    }

    pub(crate) fn in_links(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[idx].inc.keys().copied()
    }

    fn intern(&mut self, v: V) -> usize {
        let (idx, inserted) = self.vertices.insert_full(v);
        if inserted {
            self.adjacency.push(Adjacency::default());
        }
        idx
    }

    fn push_label(&mut self, label: E) -> LabelId {
        self.labels.push(label);
        LabelId(self.labels.len() - 1)
    }

    fn link(&mut self, from: usize, to: usize, slot: LabelId) {
        let fresh = self.adjacency[from].out.insert(to, slot).is_none();
        self.adjacency[to].inc.insert(from, slot);
        if fresh {
            self.edges += 1;
        }
    }
}

/// Restartable iterator over one side of a vertex's adjacency.
pub struct Neighbors<'g, V> {
    vertices: &'g IndexSet<V>,
    ids: indexmap::map::Keys<'g, usize, LabelId>,
}

impl<V> Clone for Neighbors<'_, V> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices,
            ids: self.ids.clone(),
        }
    }
}

impl<'g, V> Iterator for Neighbors<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<&'g V> {
        let vertices = self.vertices;
        self.ids.next().and_then(|&idx| vertices.get_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
