use std::io::Write;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

/// Executable invoked for desktop notifications, resolved via PATH.
pub const NOTIFIER_BIN: &str = "notify-send";

/// Fan-out for status reports: stderr always, desktop only when a title
/// was configured.
#[derive(Debug, Clone)]
pub struct Notifier {
    title: String,
}

impl Notifier {
    pub fn new(title: String) -> Self {
        Self { title }
    }

    /// Write a status report to stderr. Best-effort; a closed stream is
    /// not an error.
    pub fn report_stderr(&self, status: &str) {
        let _ = writeln!(std::io::stderr(), "{status}");
    }

    /// Show a desktop notification with the configured title, waiting for
    /// the notifier to finish. A missing binary or non-zero exit is
    /// dropped; nothing here may take down the wait.
    pub async fn desktop(&self, body: &str) {
        if self.title.is_empty() {
            return;
        }
        let result = Command::new(NOTIFIER_BIN)
            .arg(&self.title)
            .arg(body)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        match result {
            Ok(status) if !status.success() => {
                debug!(%status, "notifier exited non-zero");
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "failed to run notifier");
            }
        }
    }
}
