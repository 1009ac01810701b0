use std::io;
use std::process::{Command, Stdio};

/// Captured result of a single process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an external program to completion and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs programs with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: decode_stream(program, "stdout", output.stdout),
            stderr: decode_stream(program, "stderr", output.stderr),
        })
    }
}

/// Decode captured bytes as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_stream(program: &str, stream: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "{} wrote invalid UTF-8 to {} (at byte {}), replacing it",
                program,
                stream,
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_process_runner_captures_both_streams() {
        let args = vec![
            "-c".to_string(),
            "printf '[1, 2]'; printf 'warning' >&2".to_string(),
        ];
        let output = ProcessRunner.run("sh", &args).unwrap();

        assert!(output.success());
        assert_eq!(output.stdout, "[1, 2]");
        assert_eq!(output.stderr, "warning");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_reports_exit_code() {
        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let output = ProcessRunner.run("sh", &args).unwrap();

        assert!(!output.success());
        assert_eq!(output.status, Some(3));
    }

    #[test]
    fn test_decode_stream_valid_utf8() {
        let text = decode_stream("gallery-dl", "stdout", "[\"Café\"]".as_bytes().to_vec());
        assert_eq!(text, "[\"Café\"]");
    }

    #[test]
    fn test_decode_stream_replaces_invalid_bytes() {
        let text = decode_stream("gallery-dl", "stdout", vec![b'[', 0xff, b']']);
        assert_eq!(text, "[\u{fffd}]");
    }

    #[test]
    fn test_process_runner_missing_binary() {
        let result = ProcessRunner.run("definitely-not-an-installed-tool-7f3a", &[]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
