use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

/// Why a due-today check should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTick {
    /// The scheduler just started
    Activated,
    /// The repeating timer fired
    Interval,
}

/// Cancellable repeating timer for the due-today check.
///
/// The timer thread only sends ticks; the owner drains them with `poll()` on
/// its own thread and runs the check there. Stopping (or dropping) the
/// scheduler cancels the timer and joins the thread.
pub struct ReminderScheduler {
    rx: mpsc::Receiver<ReminderTick>,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ReminderScheduler {
    /// Start the timer. An `Activated` tick is queued immediately, then an
    /// `Interval` tick every `interval`.
    pub fn start(interval: Duration) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let _ = tx.send(ReminderTick::Activated);

        let handle = thread::Builder::new()
            .name("rally-reminders".into())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            debug!("reminder interval elapsed");
                            if tx.send(ReminderTick::Interval).is_err() {
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        info!(interval_secs = interval.as_secs(), "reminder scheduler started");
        Ok(ReminderScheduler {
            rx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Non-blocking poll for pending ticks.
    /// Returns all queued ticks (may be empty).
    pub fn poll(&self) -> Vec<ReminderTick> {
        self.rx.try_iter().collect()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer and wait for its thread. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            info!("reminder scheduler stopped");
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
