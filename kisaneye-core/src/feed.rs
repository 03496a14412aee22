//! Owned telemetry state plus the recurring timer that advances it.
//!
//! [`TelemetryFeed`] holds the current [`DroneTelemetry`] and publishes every
//! new value on a `watch` channel. [`TelemetryFeed::start`] registers a timer
//! on the current tokio runtime and returns a [`FeedHandle`]; stopping or
//! dropping the handle cancels the timer. A tick re-checks the handle's
//! cancellation flag under the state lock, so once `stop` returns no further
//! value is published.

use crate::error::FeedError;
use crate::simulator::Simulator;
use crate::telemetry::{DroneTelemetry, TelemetrySnapshot};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

struct FeedState {
    snapshot: TelemetrySnapshot,
    simulator: Simulator,
    running: bool,
}

struct Shared {
    state: Mutex<FeedState>,
    updates: watch::Sender<TelemetrySnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_tick(
        state: &mut FeedState,
        updates: &watch::Sender<TelemetrySnapshot>,
    ) -> TelemetrySnapshot {
        let next = state.simulator.tick(state.snapshot.telemetry);
        state.snapshot = TelemetrySnapshot::new(state.snapshot.tick + 1, next);
        updates.send_replace(state.snapshot);
        state.snapshot
    }
}

#[derive(Clone)]
pub struct TelemetryFeed {
    shared: Arc<Shared>,
}

impl TelemetryFeed {
    pub fn new(initial: DroneTelemetry, simulator: Simulator) -> Self {
        let snapshot = TelemetrySnapshot::new(0, initial);
        let (updates, _) = watch::channel(snapshot);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(FeedState {
                    snapshot,
                    simulator,
                    running: false,
                }),
                updates,
            }),
        }
    }

    pub fn latest(&self) -> DroneTelemetry {
        self.shared.lock().snapshot.telemetry
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.shared.lock().snapshot
    }

    pub fn ticks(&self) -> u64 {
        self.shared.lock().snapshot.tick
    }

    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    pub fn subscribe(&self) -> watch::Receiver<TelemetrySnapshot> {
        self.shared.updates.subscribe()
    }

    /// Applies one tick immediately. Returns `None` while a timer owns the feed.
    pub fn step(&self) -> Option<TelemetrySnapshot> {
        let mut state = self.shared.lock();
        if state.running {
            return None;
        }
        Some(Shared::apply_tick(&mut state, &self.shared.updates))
    }

    pub fn start(&self, period: Duration) -> Result<FeedHandle, FeedError> {
        if period.is_zero() {
            return Err(FeedError::ZeroPeriod);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| FeedError::NoRuntime)?;

        let cancelled = Arc::new(AtomicBool::new(false));
        {
            let mut state = self.shared.lock();
            if state.running {
                return Err(FeedError::AlreadyRunning);
            }
            state.running = true;
        }

        let shared = Arc::clone(&self.shared);
        let flag = Arc::clone(&cancelled);
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let snapshot = {
                    let mut state = shared.lock();
                    if flag.load(Ordering::SeqCst) {
                        break;
                    }
                    Shared::apply_tick(&mut state, &shared.updates)
                };
                log::debug!(
                    "tick {}: lat {:.7} lon {:.7} heading {:.1} battery {:.2}",
                    snapshot.tick,
                    snapshot.telemetry.latitude,
                    snapshot.telemetry.longitude,
                    snapshot.telemetry.heading,
                    snapshot.telemetry.battery
                );
            }
        });

        log::info!("telemetry feed started, period {} ms", period.as_millis());
        Ok(FeedHandle {
            shared: Arc::clone(&self.shared),
            cancelled,
            task: Some(task),
        })
    }
}

/// Timer registration for a running [`TelemetryFeed`].
pub struct FeedHandle {
    shared: Arc<Shared>,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancels the timer. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        {
            let mut state = self.shared.lock();
            self.cancelled.store(true, Ordering::SeqCst);
            state.running = false;
        }
        task.abort();
        log::info!("telemetry feed stopped");
        true
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
