use super::actions::Action;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

/// A recurring timer that sends an action every `period`.
///
/// The background task is owned by the timer and aborted when the timer is
/// dropped, so nothing is sent on behalf of a component that no longer exists.
/// Must be started from within a Tokio runtime.
#[derive(Debug)]
pub struct IntervalTimer {
    handle: JoinHandle<()>,
    period: Duration,
    started_at: std::time::Instant,
}

impl IntervalTimer {
    /// Start ticking. A zero period is raised to one millisecond.
    pub fn start(period: Duration, action_sender: mpsc::UnboundedSender<Action>, action: Action) -> Self {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            // First tick one full period after start
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if action_sender.send(action.clone()).is_err() {
                    log::debug!("Timer receiver gone, stopping");
                    break;
                }
            }
        });

        log::debug!("Started interval timer ({:?})", period);

        Self {
            handle,
            period,
            started_at: std::time::Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.handle.abort();
        log::debug!("Stopped interval timer after {:?}", self.elapsed());
    }
}
