use std::io::Write;

use chrono::{DateTime, Local};
use tokio::signal::unix::{SignalKind, signal};
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub mod cli;
pub mod duration;
pub mod notify;
pub mod status;
pub mod stdin;

pub use cli::Cli;
use notify::Notifier;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("signal setup error: {0}")]
    Signal(String),
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Reading the controlling terminal from a backgrounded process raises
/// SIGTTIN, whose default disposition stops the whole process. With the
/// signal ignored the read fails with EIO instead, which the input
/// watcher treats as its cue to go away (see `man 2 read`).
fn ignore_sigttin() -> Result<(), AppError> {
    use nix::sys::signal::{SigHandler, Signal};
    // Safety: SIG_IGN installs no handler code, so no signal-safety
    // constraints apply.
    unsafe { nix::sys::signal::signal(Signal::SIGTTIN, SigHandler::SigIgn) }
        .map_err(|e| AppError::Signal(e.to_string()))?;
    Ok(())
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    init_tracing();

    let total = cli.total_wait();
    let end = Local::now() + total;
    let notifier = Notifier::new(cli.notify.clone());

    ignore_sigttin()?;
    let mut query = signal(SignalKind::user_defined1())?;
    let mut input = stdin::spawn_watcher();

    // Completion is only ever checked on ticks, so it can lag the end
    // timestamp by up to one granularity. The first check happens one
    // granularity in; even a zero-length wait rides out the first tick.
    let mut ticker = tokio::time::interval_at(
        tokio::time::Instant::now() + cli.granularity,
        cli.granularity,
    );
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    debug!(
        total = %duration::format(duration::round_to_secs(total)),
        till = %end.format("%H:%M:%S"),
        "waiting"
    );

    loop {
        tokio::select! {
            _ = query.recv() => {
                report_status(&notifier, end).await;
            }
            // A closed channel (the watcher gave up on stdin) disables
            // this arm; signal and tick events keep working.
            Some(()) = input.recv() => {
                report_status(&notifier, end).await;
            }
            _ = ticker.tick() => {
                if Local::now() >= end {
                    if cli.bell {
                        let mut out = std::io::stdout();
                        let _ = out.write_all(b"\x07");
                        let _ = out.flush();
                    }
                    notifier
                        .desktop(&duration::format(duration::round_to_secs(total)))
                        .await;
                    debug!("wait over");
                    return Ok(());
                }
            }
        }
    }
}

async fn report_status(notifier: &Notifier, end: DateTime<Local>) {
    let line = status::status_line(end, Local::now());
    notifier.report_stderr(&line);
    notifier.desktop(&line).await;
}
