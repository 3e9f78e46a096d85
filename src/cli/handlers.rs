// src/cli/handlers.rs
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::cli::args::{Cli, Commands};
use crate::cli::repl;
use crate::config::Config;
use crate::error::QueryError;
use crate::exit::CostarExit;
use crate::input;
use crate::reporting::{self, PathReport};
use crate::universe::Universe;

/// Resolves the effective config: file first, then command-line overrides.
///
/// # Errors
/// Returns error if the config file is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.actors {
        config.input.actors.clone_from(path);
    }
    if let Some(path) = &cli.movies {
        config.input.movies.clone_from(path);
    }
    if let Some(path) = &cli.movie_actors {
        config.input.movie_actors.clone_from(path);
    }
    if cli.no_color {
        config.preferences.color = false;
    }
    Ok(config)
}

/// Loads the input files and starts a session on the configured center.
///
/// # Errors
/// Returns error if the inputs cannot be loaded or the default center is
/// not among the actors.
pub fn open_universe(config: &Config) -> Result<Universe> {
    let dataset = input::load(&config.input)
        .with_context(|| format!("failed to load inputs from {}", display_dir(&config.input.actors)))?;
    let universe = Universe::from_dataset(dataset, &config.game.default_center)
        .context("cannot start the game")?;
    info!("session ready, center {}", universe.center());
    Ok(universe)
}

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if setup fails or output cannot be written.
pub fn execute(cli: &Cli) -> Result<CostarExit> {
    let config = resolve_config(cli)?;
    if !config.preferences.color {
        colored::control::set_override(false);
    }
    let mut universe = open_universe(&config)?;

    if let Some(center) = &cli.center {
        if let Err(e) = universe.set_center(center) {
            return report_failure(&e);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            repl::run(&mut universe, stdin.lock(), &mut out)?;
            Ok(CostarExit::Success)
        }
        command => handle_query(&universe, &command, cli.json, &mut out),
    }
}

/// Answers one non-interactive query.
///
/// Query failures are reported on stderr and mapped to an exit code.
///
/// # Errors
/// Returns error if output cannot be written.
pub fn handle_query<W: Write>(universe: &Universe, command: &Commands, json: bool, out: &mut W) -> Result<CostarExit> {
    let outcome = match command {
        Commands::Play => Ok(Ok(())),
        Commands::Stats => Ok(emit(out, json, universe.stats(), |o, s| reporting::print_center(o, s))),
        Commands::Centers { count } => universe.rank_by_average_separation(*count).map(|ranked| {
            let ranked = reporting::entries(ranked);
            emit(out, json, &ranked, |o, r| {
                let shown: Vec<_> = r
                    .iter()
                    .map(|e| (e.actor.clone(), format!("{:.3}", e.score)))
                    .collect();
                reporting::print_ranking(o, "Centers by average separation", &reporting::entries(shown))
            })
        }),
        Commands::Degree { low, high } => universe.rank_by_degree(*low, *high).map(|ranked| {
            let ranked = reporting::entries(ranked);
            emit(out, json, &ranked, |o, r| reporting::print_ranking(o, "Actors by degree", r))
        }),
        Commands::Separation { low, high } => universe.rank_by_separation(*low, *high).map(|ranked| {
            let ranked = reporting::entries(ranked);
            emit(out, json, &ranked, |o, r| reporting::print_ranking(o, "Actors by separation", r))
        }),
        Commands::Infinite => {
            let report = repl::missing(universe);
            Ok(emit(out, json, &report, |o, r| reporting::print_missing(o, &r.center, &r.actors)))
        }
        Commands::Path { name } => path_report(universe, &name.join(" ")).map(|report| {
            emit(out, json, &report, |o, r| reporting::print_path(o, &r.actor, &r.center, r.separation, &r.hops))
        }),
    };

    match outcome {
        Ok(written) => {
            written?;
            Ok(CostarExit::Success)
        }
        Err(e) => report_failure(&e),
    }
}

fn path_report(universe: &Universe, name: &str) -> std::result::Result<PathReport, QueryError> {
    let hops = universe.path_steps(name)?;
    Ok(PathReport {
        actor: name.to_string(),
        center: universe.center().to_string(),
        separation: universe.separation_of(name)?,
        hops,
    })
}

fn emit<W, T, F>(out: &mut W, json: bool, value: &T, text: F) -> io::Result<()>
where
    W: Write,
    T: serde::Serialize,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    if json {
        reporting::write_json(out, value)
    } else {
        text(out, value)
    }
}

fn report_failure(err: &QueryError) -> Result<CostarExit> {
    eprintln!("{} {err}", "error:".red().bold());
    Ok(CostarExit::from(err))
}

fn display_dir(path: &Path) -> String {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| ".".to_string(), |p| p.display().to_string())
}
