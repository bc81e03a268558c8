//! Repeating poll task behind an explicit handle

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::dashboard::{client::SnapshotSource, snapshot::DashboardSnapshot};

/// Handle to a running poll loop; dropping it stops the loop
pub struct DashboardPoller {
    task: Option<JoinHandle<()>>,
    snapshots: watch::Receiver<DashboardSnapshot>,
}

impl DashboardPoller {
    /// Start polling immediately, then every `interval`
    pub fn spawn(source: Arc<dyn SnapshotSource>, interval: Duration) -> Self {
        let (tx, snapshots) = watch::channel(DashboardSnapshot::default());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match source.fetch_snapshot().await {
                    Ok(snapshot) => {
                        debug!("Dashboard snapshot refreshed");
                        if tx.send(snapshot).is_err() {
                            break;
                        }
                    }
                    // Previous snapshot stays in place
                    Err(e) => warn!(error = %e, "Error fetching dashboard data"),
                }
            }
        });

        Self {
            task: Some(task),
            snapshots,
        }
    }

    /// Latest good snapshot
    pub fn current(&self) -> DashboardSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every successful poll
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop polling and wait for the task to wind down
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for DashboardPoller {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
