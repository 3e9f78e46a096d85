// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations and format of the three input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_actors")]
    pub actors: PathBuf,
    #[serde(default = "default_movies")]
    pub movies: PathBuf,
    #[serde(default = "default_movie_actors")]
    pub movie_actors: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            actors: default_actors(),
            movies: default_movies(),
            movie_actors: default_movie_actors(),
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// The delimiter as a byte. Non-ASCII delimiters are rejected by
    /// `Config::validate`; this falls back to `|` for them.
    #[must_use]
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            u8::try_from(self.delimiter).unwrap_or(b'|')
        } else {
            b'|'
        }
    }
}

fn default_actors() -> PathBuf { PathBuf::from("inputs/bacon/actors.txt") }
fn default_movies() -> PathBuf { PathBuf::from("inputs/bacon/movies.txt") }
fn default_movie_actors() -> PathBuf { PathBuf::from("inputs/bacon/movie-actors.txt") }
const fn default_delimiter() -> char { '|' }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting center, and the root of the reference universe for rankings.
    #[serde(default = "default_center")]
    pub default_center: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { default_center: default_center() }
    }
}

fn default_center() -> String { "Kevin Bacon".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { color: true }
    }
}

const fn default_true() -> bool { true }

/// On-disk shape of `costar.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostarToml {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: InputConfig,
    pub game: GameConfig,
    pub preferences: Preferences,
}
