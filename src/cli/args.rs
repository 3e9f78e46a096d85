use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "costar", version, about = "Degrees of separation over an actor co-occurrence graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./costar.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Actor file, `id|name` per line
    #[arg(long, global = true, value_name = "FILE")]
    pub actors: Option<PathBuf>,
    /// Movie file, `id|title` per line
    #[arg(long, global = true, value_name = "FILE")]
    pub movies: Option<PathBuf>,
    /// Cast file, `movie_id|actor_id` per line
    #[arg(long, global = true, value_name = "FILE")]
    pub movie_actors: Option<PathBuf>,
    /// Center of the universe to query against
    #[arg(long, short, global = true, value_name = "NAME")]
    pub center: Option<String>,
    /// Print results as JSON (one-shot commands)
    #[arg(long, global = true)]
    pub json: bool,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive game (default)
    Play,
    /// Summary of the current center
    Stats,
    /// Top (positive) or bottom (negative) centers by average separation
    Centers {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Actors with degree between low and high
    Degree { low: usize, high: usize },
    /// Actors with infinite separation from the center
    Infinite,
    /// Path from an actor to the center
    Path {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Actors with separation between low and high
    Separation { low: usize, high: usize },
}
