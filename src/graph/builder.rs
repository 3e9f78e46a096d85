// src/graph/builder.rs
//! Collapses a group -> members relation into a co-membership graph.

use std::collections::BTreeSet;
use std::hash::Hash;

use super::labeled::LabeledGraph;
use crate::error::GraphError;

/// Graph whose edge labels collect every group shared by the two endpoints.
pub type MembershipGraph<M, K> = LabeledGraph<M, BTreeSet<K>>;

/// Builds the co-membership graph.
///
/// Every entry of `members` becomes a vertex, including members that belong
/// to no group. Every unordered pair sharing a group gets one undirected edge
/// labeled with the set of groups they share. The result does not depend on
/// the order of groups or of members within a group.
///
/// # Errors
/// Returns error if an edge joining a pair exists in one direction only,
/// which cannot happen in a graph built solely by this module.
pub fn build_graph<M, K, I, G, S>(members: I, groups: G) -> Result<MembershipGraph<M, K>, GraphError>
where
    M: Eq + Hash + Clone,
    K: Ord + Clone,
    I: IntoIterator<Item = M>,
    G: IntoIterator<Item = (K, S)>,
    S: IntoIterator<Item = M>,
{
    let mut graph = LabeledGraph::new();
    for member in members {
        graph.insert_vertex(member);
    }
    for (key, group) in groups {
        add_group(&mut graph, &key, group)?;
    }
    Ok(graph)
}

/// Links every pair of distinct members of one group and records `key` on
/// each pair's shared label.
///
/// # Errors
/// See [`build_graph`].
pub fn add_group<M, K, S>(
    graph: &mut MembershipGraph<M, K>,
    key: &K,
    members: S,
) -> Result<(), GraphError>
where
    M: Eq + Hash + Clone,
    K: Ord + Clone,
    S: IntoIterator<Item = M>,
{
    let members: Vec<M> = members.into_iter().collect();
    for (i, x) in members.iter().enumerate() {
        for y in members.iter().skip(i + 1) {
            if x != y {
                link_pair(graph, key, x, y)?;
            }
        }
    }
    Ok(())
}

fn link_pair<M, K>(graph: &mut MembershipGraph<M, K>, key: &K, x: &M, y: &M) -> Result<(), GraphError>
where
    M: Eq + Hash + Clone,
    K: Ord + Clone,
{
    if !graph.has_edge(x, y) {
        graph.insert_undirected(x.clone(), y.clone(), BTreeSet::new())?;
    }
    graph.label_mut(x, y)?.insert(key.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn set(items: &[&'static str]) -> BTreeSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_pairs_share_one_label() {
        let groups = vec![("m1", vec!["a", "b", "c"])];
        let g = build_graph(Vec::new(), groups).unwrap();

        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 6);
        assert_eq!(g.label("a", "c").unwrap(), &set(&["m1"]));
        assert_eq!(g.edge_slot("a", "c"), g.edge_slot("c", "a"));
    }

    #[test]
    fn test_labels_accumulate_across_groups() {
        let groups = vec![("m1", vec!["a", "b"]), ("m2", vec!["b", "a"]), ("m3", vec!["b", "c"])];
        let g = build_graph(Vec::new(), groups).unwrap();

        assert_eq!(g.label("a", "b").unwrap(), &set(&["m1", "m2"]));
        assert_eq!(g.label("b", "a").unwrap(), &set(&["m1", "m2"]));
        assert_eq!(g.label("c", "b").unwrap(), &set(&["m3"]));
        assert_eq!(g.num_edges(), 4);
    }

    #[test]
    fn test_isolated_members_are_kept() {
        let groups: BTreeMap<&str, Vec<&str>> = BTreeMap::from([("m1", vec!["a", "b"])]);
        let g = build_graph(["a", "b", "loner"], groups).unwrap();
        assert!(g.has_vertex("loner"));
        assert_eq!(g.out_degree("loner"), Ok(0));
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![("m1", vec!["a", "b", "c"]), ("m2", vec!["c", "d"])];
        let backward = vec![("m2", vec!["d", "c"]), ("m1", vec!["c", "b", "a"])];
        let f = build_graph(Vec::new(), forward).unwrap();
        let b = build_graph(Vec::new(), backward).unwrap();

        assert_eq!(f.num_edges(), b.num_edges());
        for (x, y) in [("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")] {
            assert_eq!(f.label(x, y).unwrap(), b.label(x, y).unwrap());
        }
    }

    #[test]
    fn test_singleton_group_adds_no_edges() {
        let g = build_graph(Vec::new(), vec![("solo", vec!["a"])]).unwrap();
        assert_eq!(g.num_edges(), 0);
        assert!(!g.has_vertex("a"));
    }
}
