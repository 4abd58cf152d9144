//! Heartbeat reaper: periodically evicts participants that stopped sending
//! heartbeats and announces their departure.
//!
//! The reaper is an explicit task: it is spawned by the server with the use
//! case it drives, and stopped through the shutdown channel of its
//! [`ReaperHandle`]. Failures never end the loop; the next tick re-evaluates
//! staleness from the current time.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::usecase::EvictStaleParticipantsUseCase;

/// Reaper timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaperConfig {
    /// Time between two eviction passes
    pub interval: Duration,
    /// Inactivity after which a participant is evicted
    pub staleness_threshold: Duration,
}

/// Recurring eviction task
pub struct Reaper {
    usecase: Arc<EvictStaleParticipantsUseCase>,
    interval: Duration,
}

/// Handle to a running reaper
pub struct ReaperHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signal the reaper to stop and wait for the current tick to finish
    pub async fn shutdown(self) {
        // The receiver only disappears if the task already ended.
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.join.await {
            tracing::error!("Reaper task ended abnormally: {}", e);
        }
    }
}

impl Reaper {
    pub fn new(usecase: Arc<EvictStaleParticipantsUseCase>, interval: Duration) -> Self {
        Self { usecase, interval }
    }

    /// Spawn the reaper loop on the current tokio runtime.
    ///
    /// The first pass runs one full interval after start.
    pub fn spawn(self) -> ReaperHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(self.run(shutdown_rx));
        ReaperHandle { shutdown_tx, join }
    }

    async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // `interval` completes its first tick immediately.
        ticker.tick().await;

        tracing::info!("Reaper started (interval: {:?})", self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick().await,
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::info!("Reaper stopped");
    }

    /// Run one eviction pass in its own task so that a panic inside it is
    /// reported and the loop keeps going.
    async fn tick(&self) {
        let usecase = self.usecase.clone();
        match tokio::spawn(async move { usecase.execute().await }).await {
            Ok(Ok(report)) => {
                if !report.evicted.is_empty() {
                    tracing::info!(
                        "Reaper evicted {} participant(s), {} departure announcement(s) failed",
                        report.evicted.len(),
                        report.failed_announcements.len()
                    );
                }
            }
            Ok(Err(e)) => tracing::error!("Reaper tick skipped: {}", e),
            Err(e) => tracing::error!("Reaper tick panicked: {}", e),
        }
    }
}
