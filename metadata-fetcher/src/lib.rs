pub mod clock;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod io;
pub mod runner;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::clock::{timestamped_dir_name, Clock, FixedClock, SystemClock};
pub use crate::error::{FetchError, Result};
pub use crate::extractor::{create_extractor_command, metadata_command, ExtractorCommand};
pub use crate::fetcher::{FetchConfig, MetadataFetcher, METADATA_FILE_NAME};
pub use crate::runner::{CommandOutput, CommandRunner, ProcessRunner};
