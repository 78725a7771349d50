use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// Spawn the input watcher: one unit signal per line read from stdin,
/// delivered over a single-slot channel. Sends into a full channel are
/// dropped; the pending signal already covers them.
///
/// The task stops for good on the first failed read. With SIGTTIN
/// ignored, a backgrounded process reading the terminal gets EIO here
/// instead of being stopped, and the watcher just goes away.
pub fn spawn_watcher() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(_)) => {
                    let _ = tx.try_send(());
                }
                Ok(None) => {
                    debug!("stdin closed; input watcher exiting");
                    return;
                }
                Err(e) => {
                    debug!(error = %e, "stdin read failed; input watcher exiting");
                    return;
                }
            }
        }
    });
    rx
}
