use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Identifies one scheduled dismissal.
///
/// A token only clears the acknowledgement it was issued for: once a newer
/// timer is scheduled or the pending one is cancelled, older tokens are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

struct PendingTimer {
    token: TimerToken,
    handle: JoinHandle<()>,
}

/// Single-slot cancellable timer driving acknowledgement dismissal.
///
/// At most one timer is pending at any time. Fired tokens are delivered over
/// an unbounded channel and must be checked with [`DismissalTimer::is_current`]
/// before acting on them.
pub struct DismissalTimer {
    pending: Option<PendingTimer>,
    next_token: u64,
    fired_sender: mpsc::UnboundedSender<TimerToken>,
}

impl DismissalTimer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                pending: None,
                next_token: 1,
                fired_sender: tx,
            },
            rx,
        )
    }

    /// Cancel any pending timer, then schedule a new one firing after `delay`.
    ///
    /// Returns `None` and leaves nothing pending when called outside a tokio
    /// runtime; the caller then has to clear the acknowledgement itself.
    pub fn schedule(&mut self, delay: Duration) -> Option<TimerToken> {
        self.cancel();

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("Dismissal timer not scheduled, no tokio runtime: {}", e);
                return None;
            }
        };

        let token = TimerToken(self.next_token);
        self.next_token += 1;

        // Fix the deadline now so it does not depend on when the task first runs
        let deadline = Instant::now() + delay;
        let sender = self.fired_sender.clone();
        let handle = runtime.spawn(async move {
            sleep_until(deadline).await;
            let _ = sender.send(token);
        });

        log::debug!("Scheduled dismissal timer {:?} in {:?}", token, delay);
        self.pending = Some(PendingTimer { token, handle });
        Some(token)
    }

    /// Abort the pending timer, if any. Its token becomes stale.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            log::debug!("Cancelled dismissal timer {:?}", pending.token);
        }
    }

    /// Whether `token` belongs to the timer that is still pending
    #[must_use]
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.token == token)
    }

    /// Mark the pending timer as consumed once its token has been honoured
    pub fn complete(&mut self, token: TimerToken) {
        if self.is_current(token) {
            self.pending = None;
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for DismissalTimer {
    fn drop(&mut self) {
        // No callback may outlive the widget that owns the timer
        self.cancel();
    }
}
