// src/cli/repl.rs
//! The interactive game loop.

use std::io::{self, BufRead, Write};

use crate::cli::command::GameCommand;
use crate::error::QueryError;
use crate::reporting::{self, MissingReport};
use crate::universe::Universe;

/// Reads commands from `input` until `q` or end of input.
///
/// Rejected commands and failed queries are reported to `out` and the loop
/// carries on.
///
/// # Errors
/// Returns error only if reading `input` or writing `out` fails.
pub fn run<R: BufRead, W: Write>(universe: &mut Universe, input: R, out: &mut W) -> io::Result<()> {
    reporting::print_help(out)?;
    writeln!(out)?;
    reporting::print_center(out, universe.stats())?;
    reporting::print_prompt(out, universe.center())?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<GameCommand>() {
            Ok(GameCommand::Quit) => break,
            Ok(cmd) => execute(universe, cmd, out)?,
            Err(e) => reporting::print_invalid(out, &e)?,
        }
        reporting::print_prompt(out, universe.center())?;
    }
    writeln!(out)
}

/// Runs one parsed command against the session.
///
/// # Errors
/// Returns error if writing `out` fails.
pub fn execute<W: Write>(universe: &mut Universe, cmd: GameCommand, out: &mut W) -> io::Result<()> {
    let outcome = match cmd {
        GameCommand::Centers(n) => universe.rank_by_average_separation(n).map(|ranked| {
            let ranked: Vec<(String, String)> = ranked
                .into_iter()
                .map(|(actor, avg)| (actor, format!("{avg:.3}")))
                .collect();
            reporting::print_ranking(out, "Centers by average separation", &reporting::entries(ranked))
        }),
        GameCommand::Degree { low, high } => universe.rank_by_degree(low, high).map(|ranked| {
            reporting::print_ranking(out, "Actors by degree", &reporting::entries(ranked))
        }),
        GameCommand::Separation { low, high } => universe.rank_by_separation(low, high).map(|ranked| {
            reporting::print_ranking(out, "Actors by separation", &reporting::entries(ranked))
        }),
        GameCommand::Infinite => {
            let report = missing(universe);
            Ok(reporting::print_missing(out, &report.center, &report.actors))
        }
        GameCommand::Path(name) => path(universe, &name, out),
        GameCommand::Universe(name) => universe
            .set_center(&name)
            .map(|stats| reporting::print_center(out, stats)),
        GameCommand::Help => Ok(reporting::print_help(out)),
        GameCommand::Quit => Ok(Ok(())),
    };

    match outcome {
        Ok(written) => written,
        Err(e) => reporting::print_query_error(out, &e),
    }
}

/// Actors unreachable from the current center, sorted by name.
#[must_use]
pub fn missing(universe: &Universe) -> MissingReport {
    let mut actors: Vec<String> = universe.missing().into_iter().map(str::to_string).collect();
    actors.sort();
    MissingReport {
        center: universe.center().to_string(),
        actors,
    }
}

fn path<W: Write>(universe: &Universe, name: &str, out: &mut W) -> Result<io::Result<()>, QueryError> {
    if name == universe.center() {
        return Ok(writeln!(out, "{name} is the center, try again"));
    }
    let hops = universe.path_steps(name)?;
    let separation = universe.separation_of(name)?;
    Ok(reporting::print_path(out, name, universe.center(), separation, &hops))
}
