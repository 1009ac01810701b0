use std::env;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::clock::{timestamped_dir_name, Clock, SystemClock};
use crate::error::{FetchError, Result};
use crate::extractor::{metadata_command, DEFAULT_MAX_POSTS, DEFAULT_TOOL};
use crate::io::{ensure_dir, write_pretty_json};
use crate::runner::{CommandRunner, ProcessRunner};

pub const METADATA_FILE_NAME: &str = "metadata.json";
pub const DEFAULT_DIR_PREFIX: &str = "instagram_metadata_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Extraction tool to run, looked up on `PATH` unless it is a path.
    pub tool: String,
    pub max_posts: u32,
    /// Parent of the timestamped directory used when no output directory is given.
    pub base_dir: PathBuf,
    pub dir_prefix: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            tool: DEFAULT_TOOL.to_string(),
            max_posts: DEFAULT_MAX_POSTS,
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            dir_prefix: DEFAULT_DIR_PREFIX.to_string(),
        }
    }
}

/// Runs the extraction tool for a URL and saves its JSON output as `metadata.json`.
#[derive(Debug)]
pub struct MetadataFetcher<R, C> {
    config: FetchConfig,
    runner: R,
    clock: C,
}

impl MetadataFetcher<ProcessRunner, SystemClock> {
    pub fn with_config(config: FetchConfig) -> Self {
        MetadataFetcher::new(config, ProcessRunner, SystemClock)
    }
}

impl Default for MetadataFetcher<ProcessRunner, SystemClock> {
    fn default() -> Self {
        MetadataFetcher::with_config(FetchConfig::default())
    }
}

impl<R: CommandRunner, C: Clock> MetadataFetcher<R, C> {
    pub fn new(config: FetchConfig, runner: R, clock: C) -> Self {
        MetadataFetcher {
            config,
            runner,
            clock,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Fetch metadata for `url`, returning the saved file or `None` on any failure.
    ///
    /// Failures are logged, never propagated.
    pub fn fetch(&self, url: &str, output_dir: Option<&Path>) -> Option<PathBuf> {
        match self.try_fetch(url, output_dir) {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("{}", e);
                if let Some(details) = e.details() {
                    log::error!("Error details: {}", details);
                }
                None
            }
        }
    }

    pub fn try_fetch(&self, url: &str, output_dir: Option<&Path>) -> Result<PathBuf> {
        let output_dir = self.resolve_output_dir(output_dir);
        ensure_dir(&output_dir)?;
        let output_file = output_dir.join(METADATA_FILE_NAME);

        let tool = &self.config.tool;
        let cmd = metadata_command(tool, self.config.max_posts, url);

        log::info!("Extracting metadata from {}...", url);
        let output = self
            .runner
            .run(cmd.program(), cmd.args())
            .map_err(|source| FetchError::Launch {
                tool: tool.clone(),
                source,
            })?;

        if !output.success() {
            return Err(FetchError::ToolFailed {
                tool: tool.clone(),
                status: output.status,
                stderr: output.stderr,
            });
        }

        if !output.stderr.trim().is_empty() {
            log::warn!("{} reported: {}", tool, output.stderr.trim_end());
        }

        // Whitespace-only output falls through to the JSON parser
        if output.stdout.is_empty() {
            return Err(FetchError::EmptyOutput { tool: tool.clone() });
        }

        let metadata: Value = serde_json::from_str(&output.stdout)?;
        log::info!("Received {}", describe_document(&metadata));

        write_pretty_json(&output_file, &metadata)?;
        log::info!("Metadata successfully saved to {}", output_file.display());

        Ok(output_file)
    }

    /// The caller's directory, or a new timestamped one under the base directory.
    pub fn resolve_output_dir(&self, output_dir: Option<&Path>) -> PathBuf {
        match output_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => self.config.base_dir.join(timestamped_dir_name(
                &self.config.dir_prefix,
                self.clock.now(),
            )),
        }
    }
}

fn describe_document(metadata: &Value) -> String {
    match metadata {
        Value::Array(entries) if entries.len() == 1 => "1 entry".to_string(),
        Value::Array(entries) => format!("{} entries", entries.len()),
        _ => "1 document".to_string(),
    }
}
