// ============================================================================
// Ticker Runtime
// Periodic tokio task publishing tick snapshots
// ============================================================================

use super::{evaluate_tick, TickSnapshot, TickerConfig};
use crate::display::DigitFormatter;
use crate::domain::SalaryConfig;
use crate::interfaces::{Clock, TickObserver};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{oneshot, watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Spawn the tick loop on the current tokio runtime.
///
/// The first snapshot is computed synchronously so subscribers never see an
/// empty channel. A config change is evaluated immediately instead of
/// waiting for the next interval. Dropping the handle stops the loop.
pub fn spawn_ticker(
    config: SalaryConfig,
    formatter: DigitFormatter,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn TickObserver>,
    ticker_config: TickerConfig,
) -> TickerHandle {
    if let Err(e) = ticker_config.validate() {
        tracing::warn!("{}, using {:?}", e, TickerConfig::MIN_INTERVAL);
    }
    let period = ticker_config.interval.max(TickerConfig::MIN_INTERVAL);

    if let Err(e) = config.validate_with(formatter.table()) {
        tracing::warn!("Starting ticker with invalid config: {}", e);
    }

    let first = evaluate_tick(&config, &formatter, clock.now());
    let (snapshots, receiver) = watch::channel(first);
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let config = Arc::new(RwLock::new(config));
    let changed = Arc::new(Notify::new());

    let task = {
        let config = Arc::clone(&config);
        let changed = Arc::clone(&changed);
        let formatter = formatter.clone();

        tokio::spawn(async move {
            // The first snapshot is already published, so skip the immediate tick
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tracing::debug!("Earnings ticker started ({:?} interval)", period);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticks.tick() => {},
                    _ = changed.notified() => {},
                }

                // Clone out so the lock is not held across the formatter
                let current = config.read().clone();
                let snapshot = evaluate_tick(&current, &formatter, clock.now());
                observer.on_tick(&snapshot);

                if snapshots.send(snapshot).is_err() {
                    // Handle and all subscribers gone
                    break;
                }
            }

            observer.on_stop();
            tracing::debug!("Earnings ticker task exited");
        })
    };

    TickerHandle {
        config,
        formatter,
        changed,
        receiver,
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}

/// Control handle for a running ticker
pub struct TickerHandle {
    config: Arc<RwLock<SalaryConfig>>,
    formatter: DigitFormatter,
    changed: Arc<Notify>,
    receiver: watch::Receiver<TickSnapshot>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// New receiver for snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<TickSnapshot> {
        self.receiver.clone()
    }

    /// Most recently published snapshot
    pub fn latest(&self) -> TickSnapshot {
        self.receiver.borrow().clone()
    }

    /// Current salary configuration
    pub fn config(&self) -> SalaryConfig {
        self.config.read().clone()
    }

    /// Replace the salary configuration and trigger an immediate tick
    pub fn update_config(&self, config: SalaryConfig) {
        if let Err(e) = config.validate_with(self.formatter.table()) {
            tracing::warn!("Applying invalid config: {}", e);
        }
        *self.config.write() = config;
        self.changed.notify_one();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the loop and wait for the task to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Earnings ticker task failed: {}", e);
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
