//! Background worker: keeps a feedback loop running over a queue of pending
//! actions. A cooperative tokio task polls at a configured cadence, drains
//! the queue through `suggest_actions`, and backs off exponentially (capped,
//! each escalation logged with the attempt count) while cycles keep failing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use steer_core::config::WorkerConfig;
use steer_core::errors::ConfigError;
use steer_core::types::ActionRecord;

use crate::loop_engine::FeedbackLoop;

/// Explicit backoff state: attempt count and current delay, capped.
#[derive(Debug, Clone)]
struct Backoff {
    base: Duration,
    cap: Duration,
    attempts: u32,
}

impl Backoff {
    fn new(base: Duration, cap: Duration) -> Self {
        Self {
            base,
            cap,
            attempts: 0,
        }
    }

    /// The delay before the next poll.
    fn current(&self) -> Duration {
        if self.attempts == 0 {
            return self.base;
        }
        let factor = 2u32.saturating_pow(self.attempts - 1);
        self.base
            .checked_mul(factor)
            .map_or(self.cap, |delay| delay.min(self.cap))
    }

    fn escalate(&mut self) -> (u32, Duration) {
        self.attempts += 1;
        (self.attempts, self.current())
    }

    fn reset(&mut self) {
        self.attempts = 0;
    }
}

enum DrainOutcome {
    Idle,
    Processed { batch_len: usize, degraded: bool },
}

/// Runs a [`FeedbackLoop`] on its own task. Access to the shared loop is
/// serialized through a mutex; the worker is the only writer it assumes.
pub struct FeedbackWorker {
    feedback: Arc<Mutex<FeedbackLoop>>,
    queue: Arc<Mutex<VecDeque<ActionRecord>>>,
    config: WorkerConfig,
    stop_tx: Option<watch::Sender<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl FeedbackWorker {
    pub fn new(feedback: Arc<Mutex<FeedbackLoop>>, config: WorkerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            feedback,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            config,
            stop_tx: None,
            handle: None,
        })
    }

    /// Queue actions for the next poll cycle.
    pub fn enqueue(&self, actions: impl IntoIterator<Item = ActionRecord>) {
        let mut queue = lock(&self.queue);
        queue.extend(actions);
    }

    /// Actions waiting for the next cycle.
    pub fn pending(&self) -> usize {
        lock(&self.queue).len()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Spawn the polling task. A second start while running is a no-op.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("feedback worker already running");
            return;
        }

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let feedback = Arc::clone(&self.feedback);
        let queue = Arc::clone(&self.queue);
        let poll_interval = Duration::from_secs(self.config.poll_interval_secs);
        let max_backoff = Duration::from_secs(self.config.max_backoff_secs);

        info!(
            poll_interval_secs = self.config.poll_interval_secs,
            "starting feedback worker"
        );

        let handle = tokio::spawn(async move {
            let mut backoff = Backoff::new(poll_interval, max_backoff);

            loop {
                let delay = backoff.current();
                tokio::select! {
                    changed = stop_rx.changed() => {
                        match changed {
                            Ok(()) if *stop_rx.borrow() => {
                                debug!("feedback worker received stop signal");
                                break;
                            }
                            Ok(()) => {}
                            // Sender gone: nobody can stop us cooperatively.
                            Err(_) => break,
                        }
                    }
                    _ = tokio::time::sleep(delay) => {}
                }

                let feedback = Arc::clone(&feedback);
                let queue = Arc::clone(&queue);
                // Persistence may block (SQLite, HTTP), so drain off the
                // async executor.
                let outcome = tokio::task::spawn_blocking(move || {
                    let batch: Vec<ActionRecord> = {
                        let mut queue = lock(&queue);
                        queue.drain(..).collect()
                    };
                    if batch.is_empty() {
                        return DrainOutcome::Idle;
                    }
                    let batch_len = batch.len();
                    let mut feedback = lock(&feedback);
                    feedback.suggest_actions(None, batch, None);
                    let degraded = feedback
                        .last_cycle()
                        .is_some_and(|report| report.failed_actions > 0 || !report.persisted);
                    DrainOutcome::Processed { batch_len, degraded }
                })
                .await;

                match outcome {
                    Ok(DrainOutcome::Idle) => backoff.reset(),
                    Ok(DrainOutcome::Processed {
                        batch_len,
                        degraded: false,
                    }) => {
                        backoff.reset();
                        info!(batch_len, "processed pending feedback actions");
                    }
                    Ok(DrainOutcome::Processed {
                        batch_len,
                        degraded: true,
                    }) => {
                        let (attempt, delay) = backoff.escalate();
                        warn!(
                            batch_len,
                            attempt,
                            delay_secs = delay.as_secs(),
                            "feedback cycle degraded; backing off"
                        );
                    }
                    Err(join_err) => {
                        let (attempt, delay) = backoff.escalate();
                        error!(
                            error = %join_err,
                            attempt,
                            delay_secs = delay.as_secs(),
                            "feedback cycle panicked; backing off"
                        );
                    }
                }
            }
        });

        self.stop_tx = Some(stop_tx);
        self.handle = Some(handle);
    }

    /// Signal the task to stop and wait for it to finish.
    pub async fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                error!(error = %err, "feedback worker task failed on shutdown");
            }
        }
        info!("feedback worker stopped");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
