// tests/integration_game.rs
//! Full game sessions driven through the interactive loop.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

use costar_core::cli::repl;
use costar_core::input::Dataset;
use costar_core::universe::Universe;

fn cast(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn universe() -> Universe {
    let casts = BTreeMap::from([
        ("Apollo 13".to_string(), cast(&["Kevin Bacon", "Tom Hanks", "Bill Paxton"])),
        ("Sleepless in Seattle".to_string(), cast(&["Tom Hanks", "Meg Ryan"])),
        ("Twister".to_string(), cast(&["Bill Paxton"])),
    ]);
    let dataset = Dataset {
        actors: ["Kevin Bacon", "Tom Hanks", "Bill Paxton", "Meg Ryan", "Lone Actor"]
            .map(String::from)
            .to_vec(),
        casts,
    };
    Universe::from_dataset(dataset, "Kevin Bacon").unwrap()
}

fn play(universe: &mut Universe, script: &str) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    repl::run(universe, Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_session_banner() {
    let mut u = universe();
    let out = play(&mut u, "q\n");
    assert!(out.contains("Commands:"));
    assert!(out.contains(
        "Kevin Bacon is now the center of the acting universe, connected to 3/5 actors with average separation 1.333"
    ));
    assert!(out.contains("Kevin Bacon game > "));
}

#[test]
fn test_path_and_missing() {
    let mut u = universe();
    let out = play(&mut u, "p Meg Ryan\ni\nq\n");
    assert!(out.contains("Meg Ryan's number is 2"));
    assert!(out.contains("Meg Ryan appeared in [Sleepless in Seattle] with Tom Hanks"));
    assert!(out.contains("Tom Hanks appeared in [Apollo 13] with Kevin Bacon"));
    assert!(out.contains("1 actors with infinite separation from Kevin Bacon"));
    assert!(out.contains("  Lone Actor"));
}

#[test]
fn test_center_change_moves_the_prompt() {
    let mut u = universe();
    let out = play(&mut u, "u Tom Hanks\np Kevin Bacon\n");
    assert!(out.contains("Tom Hanks is now the center of the acting universe, connected to 3/5 actors with average separation 1.000"));
    assert!(out.contains("Tom Hanks game > "));
    assert!(out.contains("Kevin Bacon's number is 1"));
    assert_eq!(u.center(), "Tom Hanks");
}

#[test]
fn test_bad_entries_keep_the_session_going() {
    let mut u = universe();
    let out = play(&mut u, "x\nc 0\nu Nobody\np Lone Actor\np Kevin Bacon\nd 3 1\nq\n");
    assert!(out.contains("invalid entry, try again (unknown command: x)"));
    assert!(out.contains("error: invalid range: count must not be zero"));
    assert!(out.contains("error: Nobody is not in the graph"));
    assert!(out.contains("Lone Actor has no path to Kevin Bacon"));
    assert!(out.contains("Kevin Bacon is the center, try again"));
    assert!(out.contains("error: invalid range: low bound 3 is above high bound 1"));
    assert_eq!(u.center(), "Kevin Bacon");
}

#[test]
fn test_rankings() {
    let mut u = universe();
    let out = play(&mut u, "c 1\nc -1\nd 2 3\ns 2 2\nq\n");
    assert!(out.contains("Centers by average separation (1)"));
    assert!(out.contains("1. Tom Hanks (1.000)"));
    assert!(out.contains("1. Meg Ryan (1.667)"));
    assert!(out.contains("Actors by degree (3)"));
    assert!(out.contains("1. Tom Hanks (3)"));
    assert!(out.contains("Actors by separation (1)"));
    assert!(out.contains("1. Meg Ryan (2)"));
}
