//! Relay stdin to stdout and report via the exit code whether any bytes
//! flowed.
//!
//! Exit code 0: the input ended without delivering any bytes.
//! Exit code 1: the input delivered bytes; they were copied to stdout.
//! Exit code 2: a stream error interrupted the relay; details on stderr.
//!
//! Usage:
//! ```text
//! your_command 2>&1 | pipe-exit
//! ```

use std::io;
use std::process::ExitCode;

use pipe_exit::{Relay, StdSink, StdSource};

fn main() -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut relay = Relay::new(StdSource::new(stdin), StdSink::new(stdout));
    match relay.run() {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            eprintln!("pipe-exit: error while relaying standard input: {}", e);
            ExitCode::from(2)
        }
    }
}
