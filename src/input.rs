// src/input.rs
//! Loader for the three delimited input files.
//!
//! actors:       `actor_id|actor name`
//! movies:       `movie_id|movie title`
//! movie-actors: `movie_id|actor_id`

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::path::Path;

use log::{info, warn};

use crate::config::InputConfig;
use crate::error::InputError;

/// Everything the cast graph is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Every actor named in the actor file, in file order.
    pub actors: Vec<String>,
    /// Movie title -> actors credited in it.
    pub casts: BTreeMap<String, BTreeSet<String>>,
}

/// Reads and joins the three input files.
///
/// Cast rows naming an unknown movie or actor id are skipped.
///
/// # Errors
/// Returns error if a file cannot be read or holds a row with fewer than two
/// fields.
pub fn load(cfg: &InputConfig) -> Result<Dataset, InputError> {
    let delimiter = cfg.delimiter_byte();
    let actor_rows = read_rows(&cfg.actors, delimiter)?;
    let movies: HashMap<String, String> = read_rows(&cfg.movies, delimiter)?.into_iter().collect();
    let cast_rows = read_rows(&cfg.movie_actors, delimiter)?;

    let actors: HashMap<&str, &str> = actor_rows
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();

    let mut casts: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut skipped = 0usize;
    for (movie_id, actor_id) in &cast_rows {
        let (Some(title), Some(name)) = (movies.get(movie_id), actors.get(actor_id.as_str())) else {
            warn!("skipping cast row {movie_id}|{actor_id}: unknown id");
            skipped += 1;
            continue;
        };
        casts
            .entry(title.clone())
            .or_default()
            .insert((*name).to_string());
    }

    info!(
        "loaded {} actors, {} movies, {} cast rows ({skipped} skipped)",
        actor_rows.len(),
        movies.len(),
        cast_rows.len()
    );

    Ok(Dataset {
        actors: actor_rows.into_iter().map(|(_, name)| name).collect(),
        casts,
    })
}

/// Reads `key|value` rows. Fields past the second are ignored.
///
/// # Errors
/// Returns error on I/O failure or on a row with fewer than two fields.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<(String, String)>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| InputError::Csv {
            source,
            path: path.to_path_buf(),
        })?;
        match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => rows.push((key.to_string(), value.to_string())),
            _ => {
                return Err(InputError::Malformed {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, csv::Position::line),
                })
            }
        }
    }
    Ok(rows)
}
