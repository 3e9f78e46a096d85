// tests/unit_rank.rs
//! Ranking order and bounds through the session API.

use std::collections::{BTreeMap, BTreeSet};

use costar_core::error::QueryError;
use costar_core::input::Dataset;
use costar_core::universe::Universe;

fn names(v: &[&str]) -> BTreeSet<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

/// a-b-c-d path plus b-e, and an isolated z.
fn universe() -> Universe {
    let casts = BTreeMap::from([
        ("ab".to_string(), names(&["a", "b"])),
        ("bc".to_string(), names(&["b", "c"])),
        ("cd".to_string(), names(&["c", "d"])),
        ("be".to_string(), names(&["b", "e"])),
    ]);
    let dataset = Dataset {
        actors: ["a", "b", "c", "d", "e", "z"].map(String::from).to_vec(),
        casts,
    };
    Universe::from_dataset(dataset, "a").unwrap()
}

#[test]
fn test_centers_are_ordered_by_average() {
    let u = universe();
    let top = u.rank_by_average_separation(5).unwrap();
    assert_eq!(top.len(), 5);
    assert!(top.windows(2).all(|w| w[0].1 <= w[1].1));
    assert_eq!(top[0].0, "b");
    // a and e tie at 2.0; the name decides
    assert_eq!(top[2].0, "a");
    assert_eq!(top[3].0, "e");

    let bottom = u.rank_by_average_separation(-2).unwrap();
    assert!(bottom.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(bottom.iter().map(|(a, _)| a.as_str()).collect::<Vec<_>>(), vec!["d", "a"]);
}

#[test]
fn test_center_count_is_bounded_by_reference() {
    let u = universe();
    assert!(matches!(u.rank_by_average_separation(0), Err(QueryError::InvalidRange(_))));
    assert!(matches!(u.rank_by_average_separation(6), Err(QueryError::InvalidRange(_))));
    assert!(matches!(u.rank_by_average_separation(-6), Err(QueryError::InvalidRange(_))));
}

#[test]
fn test_center_ranking_ignores_active_center() {
    let mut u = universe();
    let before = u.rank_by_average_separation(3).unwrap();
    u.set_center("z").unwrap();
    assert_eq!(u.rank_by_average_separation(3).unwrap(), before);
}

#[test]
fn test_degree_ranking() {
    let u = universe();
    let ranked = u.rank_by_degree(1, 2).unwrap();
    assert!(ranked.iter().all(|(_, d)| (1..=2).contains(d)));
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(ranked[0], ("c".to_string(), 2));
    assert!(ranked.iter().all(|(a, _)| a != "b"));

    assert!(matches!(u.rank_by_degree(3, 1), Err(QueryError::InvalidRange(_))));
}

#[test]
fn test_separation_ranking() {
    let u = universe();
    let ranked = u.rank_by_separation(1, 2).unwrap();
    assert_eq!(
        ranked,
        vec![("b".to_string(), 1), ("c".to_string(), 2), ("e".to_string(), 2)]
    );
    assert!(u.rank_by_separation(0, 0).unwrap().is_empty());
    assert!(matches!(u.rank_by_separation(2, 1), Err(QueryError::InvalidRange(_))));
}
