//! Error types for the town graph library.

use thiserror::Error;

/// All errors that can occur in the town graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A required town argument was blank.
    #[error("Missing {role} town")]
    MissingTown { role: &'static str },

    /// Town is not a member of the graph.
    #[error("Town {0:?} is not in the graph")]
    UnknownTown(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in a map file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration could not be read or is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    /// Process exit code for the command-line tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Parse { .. } | Self::Config(_) => 2,
            Self::MissingTown { .. } | Self::UnknownTown(_) => 4,
        }
    }
}

/// Convenience result type for town graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
