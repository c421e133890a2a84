//! Print submission through an external command.
//!
//! The collaborator's exit status is not trusted; success is decided by
//! finding the configured marker in its stderr.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::PrinterConfig;
use crate::error::LabelError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Check collaborator diagnostics for the success marker.
pub fn interpret_diagnostics(diagnostics: &str, success_marker: &str) -> Result<(), LabelError> {
    if diagnostics.contains(success_marker) {
        Ok(())
    } else {
        Err(LabelError::PrintDispatch(diagnostics.trim().to_string()))
    }
}

/// Runs the print collaborator for saved label files.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: PrinterConfig,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            timeout: None,
        }
    }

    /// Kill the collaborator and fail if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Print `file`; blocks until the collaborator exits or times out.
    pub fn print(&self, file: &Path) -> Result<(), LabelError> {
        let mut cmd = Command::new(&self.config.command);
        cmd.args(self.config.args(file))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        debug!(command = ?cmd, "dispatching print job");

        let child = cmd.spawn().map_err(|e| {
            LabelError::PrintDispatch(format!("Failed to run '{}': {}", self.config.command, e))
        })?;

        let output = match self.timeout {
            Some(timeout) => wait_with_timeout(child, timeout)?,
            None => child.wait_with_output()?,
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        interpret_diagnostics(&stderr, &self.config.success_marker)?;
        info!(printer = %self.config.name, file = %file.display(), "label printed");
        Ok(())
    }
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> Result<Output, LabelError> {
    // a child blocks once a pipe is full, so both are drained while polling
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Output {
                status,
                stdout: collect(stdout),
                stderr: collect(stderr),
            });
        }
        if Instant::now() >= deadline {
            // already exited is fine; either way reap it
            let _ = child.kill();
            let _ = child.wait();
            // readers are left to finish on their own: a grandchild may still hold the pipe
            return Err(LabelError::PrintTimeout(timeout));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}
