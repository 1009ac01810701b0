use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {}", describe_status(.status))]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("No metadata returned from {tool}")]
    EmptyOutput { tool: String },

    #[error("Error parsing JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Captured stderr of a failed tool run, if there was any.
    pub fn details(&self) -> Option<&str> {
        match self {
            FetchError::ToolFailed { stderr, .. } if !stderr.trim().is_empty() => {
                Some(stderr.trim_end())
            }
            _ => None,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
