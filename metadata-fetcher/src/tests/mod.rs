use std::cell::RefCell;
use std::io;

use crate::runner::{CommandOutput, CommandRunner};

pub mod fixtures;

/// Stands in for the extraction tool: returns a canned result and records each call.
pub struct FakeRunner {
    output: std::result::Result<CommandOutput, io::ErrorKind>,
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn exiting(status: i32, stdout: &str, stderr: &str) -> FakeRunner {
        FakeRunner {
            output: Ok(CommandOutput {
                status: Some(status),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A run terminated by a signal, so there is no exit code.
    pub fn killed(stderr: &str) -> FakeRunner {
        FakeRunner {
            output: Ok(CommandOutput {
                status: None,
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn succeeding(stdout: &str) -> FakeRunner {
        FakeRunner::exiting(0, stdout, "")
    }

    pub fn failing_to_launch(kind: io::ErrorKind) -> FakeRunner {
        FakeRunner {
            output: Err(kind),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        match &self.output {
            Ok(output) => Ok(output.clone()),
            Err(kind) => Err(io::Error::from(*kind)),
        }
    }
}
