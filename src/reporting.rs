// src/reporting.rs
//! Human-readable and JSON output for game results.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::error::{CommandError, QueryError};
use crate::universe::{CenterStats, Hop};

/// A ranked actor and the value it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry<T> {
    pub actor: String,
    pub score: T,
}

/// JSON shape of a path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub actor: String,
    pub center: String,
    /// `None` when the actor cannot reach the center.
    pub separation: Option<usize>,
    pub hops: Vec<Hop>,
}

/// JSON shape of the infinite-separation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    pub center: String,
    pub actors: Vec<String>,
}

#[must_use]
pub fn entries<T>(ranked: Vec<(String, T)>) -> Vec<RankEntry<T>> {
    ranked
        .into_iter()
        .map(|(actor, score)| RankEntry { actor, score })
        .collect()
}

/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// # Errors
/// Returns error if the write fails.
pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Commands:".bold())?;
    for (cmd, desc) in [
        ("c <#>", "list top (positive number) or bottom (negative) <#> centers of the universe, sorted by average separation"),
        ("d <low> <high>", "list actors sorted by degree, with degree between low and high"),
        ("i", "list actors with infinite separation from the current center"),
        ("p <name>", "find path from <name> to current center of the universe"),
        ("s <low> <high>", "list actors sorted by non-infinite separation from the current center, with separation between low and high"),
        ("u <name>", "make <name> the center of the universe"),
        ("h", "show this help"),
        ("q", "quit game"),
    ] {
        writeln!(out, "  {}: {desc}", cmd.cyan())?;
    }
    Ok(())
}

/// # Errors
/// Returns error if the write fails.
pub fn print_prompt<W: Write>(out: &mut W, center: &str) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{} game > ", center.bold())?;
    out.flush()
}

/// # Errors
/// Returns error if the write fails.
pub fn print_center<W: Write>(out: &mut W, stats: &CenterStats) -> io::Result<()> {
    let average = stats
        .average
        .map_or_else(|| "undefined".to_string(), |avg| format!("{avg:.3}"));
    writeln!(
        out,
        "{} is now the center of the acting universe, connected to {}/{} actors with average separation {}",
        stats.center.green().bold(),
        stats.reachable,
        stats.total,
        average
    )
}

/// Prints `actor`'s number and each hop toward `center`.
///
/// # Errors
/// Returns error if the write fails.
pub fn print_path<W: Write>(
    out: &mut W,
    actor: &str,
    center: &str,
    separation: Option<usize>,
    hops: &[Hop],
) -> io::Result<()> {
    let Some(number) = separation else {
        return writeln!(out, "{} has no path to {}", actor.yellow(), center);
    };
    writeln!(out, "{actor}'s number is {}", number.to_string().green().bold())?;
    for hop in hops {
        writeln!(
            out,
            "{} appeared in [{}] with {}",
            hop.actor,
            hop.movies.join(", ").dimmed(),
            hop.costar
        )?;
    }
    Ok(())
}

/// # Errors
/// Returns error if the write fails.
pub fn print_missing<W: Write>(out: &mut W, center: &str, actors: &[String]) -> io::Result<()> {
    writeln!(
        out,
        "{} actors with infinite separation from {center}",
        actors.len().to_string().bold()
    )?;
    for actor in actors {
        writeln!(out, "  {actor}")?;
    }
    Ok(())
}

/// # Errors
/// Returns error if the write fails.
pub fn print_ranking<W: Write, T: Display>(out: &mut W, title: &str, ranked: &[RankEntry<T>]) -> io::Result<()> {
    writeln!(out, "{} ({})", title.bold(), ranked.len())?;
    let width = ranked.len().to_string().len();
    for (i, entry) in ranked.iter().enumerate() {
        writeln!(out, "  {:>width$}. {} ({})", i + 1, entry.actor, entry.score)?;
    }
    Ok(())
}

/// # Errors
/// Returns error if the write fails.
pub fn print_query_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    writeln!(out, "{} {err}", "error:".red().bold())
}

/// # Errors
/// Returns error if the write fails.
pub fn print_invalid<W: Write>(out: &mut W, err: &CommandError) -> io::Result<()> {
    writeln!(out, "{} ({err})", "invalid entry, try again".red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_center_line() {
        let stats = CenterStats {
            center: "Kevin Bacon".into(),
            reachable: 3,
            total: 5,
            average: Some(1.5),
        };
        let text = render(|out| print_center(out, &stats));
        assert!(text.contains("Kevin Bacon is now the center"));
        assert!(text.contains("connected to 3/5 actors with average separation 1.500"));
    }

    #[test]
    fn test_path_lines() {
        let hops = vec![Hop {
            actor: "Meg Ryan".into(),
            costar: "Tom Hanks".into(),
            movies: vec!["Sleepless in Seattle".into(), "You've Got Mail".into()],
        }];
        let text = render(|out| print_path(out, "Meg Ryan", "Tom Hanks", Some(1), &hops));
        assert!(text.contains("Meg Ryan's number is 1"));
        assert!(text.contains("Meg Ryan appeared in [Sleepless in Seattle, You've Got Mail] with Tom Hanks"));
    }

    #[test]
    fn test_ranking_is_numbered() {
        let ranked = entries(vec![("a".to_string(), 2usize), ("b".to_string(), 1)]);
        let text = render(|out| print_ranking(out, "By degree", &ranked));
        assert!(text.contains("1. a (2)"));
        assert!(text.contains("2. b (1)"));
    }
}
