// src/exit.rs
//! Standardized process exit codes for `costar`.

use std::process::Termination;

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CostarExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, config, malformed input files).
    Error = 1,
    /// A query was rejected (bad range, bad count, undefined average).
    InvalidInput = 2,
    /// The named actor is not in the graph.
    UnknownActor = 3,
}

impl CostarExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CostarExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&QueryError> for CostarExit {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::UnknownVertex(_) => Self::UnknownActor,
            QueryError::UndefinedAverage | QueryError::InvalidRange(_) => Self::InvalidInput,
            QueryError::Graph(_) => Self::Error,
        }
    }
}
