// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the labeled graph container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex not found")]
    VertexNotFound,

    #[error("edge not found")]
    EdgeNotFound,

    #[error("edge already exists")]
    EdgeExists,
}

/// Outcomes a query can report instead of an answer.
///
/// An unreachable vertex is not listed here: it is a valid query result
/// (an empty path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{0} is not in the graph")]
    UnknownVertex(String),

    #[error("average separation is undefined: the center has no connections")]
    UndefinedAverage,

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Failures while reading the delimited input files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {source} (path: {})", path.display())]
    Csv { source: csv::Error, path: PathBuf },

    #[error("malformed record at {}:{line}", path.display())]
    Malformed { path: PathBuf, line: u64 },
}

/// Rejections of an interactive command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("not a number: {0}")]
    NotANumber(String),
}
