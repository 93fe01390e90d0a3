//! Per-question countdown as an explicit, cancelable tick source.
//!
//! The timer is armed for exactly one `TimerEpoch`. Whenever the session's epoch
//! changes (question advanced, answer locked, cheat lock, reset) the owner calls
//! [`QuestionTimer::sync`] before handling the next event, which aborts the old task
//! and arms a new one if a countdown should still run.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use quiz_core::model::TimerEpoch;

/// Default spacing between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct Armed {
    epoch: TimerEpoch,
    task: JoinHandle<()>,
}

/// Owns at most one running tick task.
pub struct QuestionTimer {
    period: Duration,
    ticks: mpsc::UnboundedSender<TimerEpoch>,
    armed: Option<Armed>,
}

impl QuestionTimer {
    #[must_use]
    pub fn new(ticks: mpsc::UnboundedSender<TimerEpoch>) -> Self {
        Self::with_period(ticks, TICK_PERIOD)
    }

    #[must_use]
    pub fn with_period(ticks: mpsc::UnboundedSender<TimerEpoch>, period: Duration) -> Self {
        Self {
            period,
            ticks,
            armed: None,
        }
    }

    /// The epoch currently being ticked, if any.
    #[must_use]
    pub fn armed_epoch(&self) -> Option<TimerEpoch> {
        self.armed.as_ref().map(|armed| armed.epoch)
    }

    /// Make the running task match `wanted`: keep it, replace it, or stop it.
    pub fn sync(&mut self, wanted: Option<TimerEpoch>) {
        if self.armed_epoch() == wanted {
            return;
        }
        self.disarm();
        if let Some(epoch) = wanted {
            self.arm(epoch);
        }
    }

    pub fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.task.abort();
            tracing::debug!(epoch = ?armed.epoch, "question timer disarmed");
        }
    }

    fn arm(&mut self, epoch: TimerEpoch) {
        let ticks = self.ticks.clone();
        let period = self.period;
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(epoch).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?epoch, "question timer armed");
        self.armed = Some(Armed { epoch, task });
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}
