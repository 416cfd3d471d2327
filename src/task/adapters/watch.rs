//! Watch-channel adapter for task list change notification.

use crate::task::ports::TaskListNotifier;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

/// Change notifier backed by a `tokio` watch channel.
///
/// The channel value is a generation counter bumped once per signal. The
/// counter exists only so the channel has a value to publish; subscribers
/// observe freshness, never a payload.
#[derive(Debug, Clone)]
pub struct WatchListNotifier {
    sender: watch::Sender<u64>,
}

impl WatchListNotifier {
    /// Creates a notifier with no pending signal.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Creates a watcher observing future change signals.
    ///
    /// Signals raised before subscription are not replayed.
    #[must_use]
    pub fn subscribe(&self) -> TaskListWatcher {
        TaskListWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for WatchListNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListNotifier for WatchListNotifier {
    fn notify_changed(&self) {
        self.sender
            .send_modify(|generation| *generation = generation.wrapping_add(1));
    }
}

/// Subscriber handle observing task list change signals.
#[derive(Debug)]
pub struct TaskListWatcher {
    receiver: watch::Receiver<u64>,
}

impl TaskListWatcher {
    /// Waits for the next change signal and marks it seen.
    ///
    /// # Errors
    ///
    /// Returns [`RecvError`] when the notifier has been dropped.
    pub async fn changed(&mut self) -> Result<(), RecvError> {
        self.receiver.changed().await
    }

    /// Reports whether an unseen change signal is pending.
    ///
    /// Returns `false` once the notifier has been dropped.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Marks any pending signal as seen without waiting.
    pub fn mark_seen(&mut self) {
        self.receiver.borrow_and_update();
    }
}
