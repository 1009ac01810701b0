use anyhow::{Context, Result};
use post_metadata_fetcher::extractor::{DEFAULT_MAX_POSTS, DEFAULT_TOOL};
use post_metadata_fetcher::{metadata_command, CommandRunner, ProcessRunner};
use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get URL and probe name from command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a URL and a probe name");
        eprintln!("Usage: cargo run --bin probe_tool <URL> <name> [tool]");
        std::process::exit(1);
    }

    let url = &args[1];
    let probe_name = &args[2];
    let tool = args.get(3).map(String::as_str).unwrap_or(DEFAULT_TOOL);

    println!("Running {} for {}...", tool, url);

    let cmd = metadata_command(tool, DEFAULT_MAX_POSTS, url);
    let output = ProcessRunner
        .run(cmd.program(), cmd.args())
        .with_context(|| format!("Failed to launch {}", tool))?;

    // Keep the raw streams for later analysis
    let probes_dir = Path::new("probes");
    fs::create_dir_all(probes_dir).context("Failed to create probes directory")?;

    let stdout_path = probes_dir.join(format!("{}.stdout.txt", probe_name));
    fs::write(&stdout_path, &output.stdout).context("Failed to write stdout capture")?;
    let stderr_path = probes_dir.join(format!("{}.stderr.txt", probe_name));
    fs::write(&stderr_path, &output.stderr).context("Failed to write stderr capture")?;

    println!("Saved stdout to {}", stdout_path.display());
    println!("Saved stderr to {}", stderr_path.display());

    println!("\nProbe results:");
    match output.status {
        Some(code) => println!("  - Exit status: {}", code),
        None => println!("  - Exit status: none (terminated by signal)"),
    }
    println!("  - Stdout bytes: {}", output.stdout.len());
    println!("  - Stderr lines: {}", output.stderr.lines().count());

    if output.stdout.trim().is_empty() {
        println!("❌ No metadata on stdout");
        return Ok(());
    }

    match serde_json::from_str::<serde_json::Value>(&output.stdout) {
        Ok(serde_json::Value::Array(entries)) => {
            println!("✅ Stdout parses as a JSON array of {} entries", entries.len());
        }
        Ok(_) => println!("✅ Stdout parses as a JSON document"),
        Err(e) => println!("❌ Stdout is not valid JSON: {}", e),
    }

    Ok(())
}
