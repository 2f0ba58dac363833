//! Status poller: watches one job until it reaches a terminal status.
//!
//! The poller is an explicit state machine, `Idle -> Polling { attempt } ->
//! Terminal(outcome)`, plus an async driver that feeds it. The machine decides
//! what happens after each observation; the driver performs the waits and the
//! fetches and checks a [`CancelToken`] around every suspension point.
//!
//! Rules:
//! - `completed` finishes successfully after a short grace delay, so that the
//!   generated cards are readable by the time the caller fetches them.
//! - Any of the five failure statuses finishes immediately with the backend
//!   message, or the per-kind fallback when none is given.
//! - `uploaded`, `processing` and unknown statuses schedule the next poll after
//!   the regular interval.
//! - A fetch that could not reach the backend is not a job failure. The next
//!   poll waits the longer back-off interval instead.
//! - Any other fetch error (proxy misconfigured, request rejected, response
//!   unreadable) finishes immediately with that error. Retrying cannot fix it.
//! - Every fetch counts against `max_attempts`. When the budget runs out the
//!   poller finishes with a timeout failure, so it never polls forever.
//!
//! The driver is runtime-agnostic: the caller supplies the fetch and the sleep
//! (gloo timers in the browser, an instant future in tests).

use crate::error::PipelineError;
use crate::jobs::{FailureKind, JobStatus, StatusReport};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const TRANSPORT_BACKOFF: Duration = Duration::from_secs(5);
pub const COMPLETION_GRACE: Duration = Duration::from_secs(1);
pub const MAX_ATTEMPTS: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub transport_backoff: Duration,
    pub completion_grace: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            transport_backoff: TRANSPORT_BACKOFF,
            completion_grace: COMPLETION_GRACE,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Shared cancellation flag. Clones observe the same flag.
///
/// The view that owns a polling loop keeps one clone and cancels it on
/// teardown; the driver checks it before every state change.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    Completed,
    Failed(PipelineError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling { attempt: u32 },
    Terminal(PollOutcome),
}

/// What one poll produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Observation {
    Status(StatusReport),
    /// The status could not be fetched or decoded.
    Unavailable(PipelineError),
}

/// What the driver must do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    PollAfter(Duration),
    Finish { delay: Duration, outcome: PollOutcome },
}

#[derive(Clone, Debug)]
pub struct StatusPoller {
    config: PollConfig,
    state: PollState,
}

impl StatusPoller {
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            state: PollState::Idle,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Number of the poll currently in flight (1-based), or `None` when idle or finished.
    pub fn attempt(&self) -> Option<u32> {
        match self.state {
            PollState::Polling { attempt } => Some(attempt),
            _ => None,
        }
    }

    /// Moves `Idle` to the first attempt. Has no effect in any other state.
    pub fn begin(&mut self) {
        if self.state == PollState::Idle {
            self.state = PollState::Polling { attempt: 1 };
        }
    }

    /// Applies the result of the poll in flight and returns the next step.
    pub fn observe(&mut self, observation: Observation) -> Step {
        let attempt = match &self.state {
            PollState::Terminal(outcome) => {
                return Step::Finish {
                    delay: Duration::ZERO,
                    outcome: outcome.clone(),
                };
            }
            PollState::Idle => 1,
            PollState::Polling { attempt } => *attempt,
        };

        let retry_after = match observation {
            Observation::Status(report) => {
                if report.status == JobStatus::Completed {
                    return self.finish(self.config.completion_grace, PollOutcome::Completed);
                }
                if let (Some(kind), Some(message)) =
                    (report.status.failure_kind(), report.failure_message())
                {
                    let error = PipelineError::BackendFailure { kind, message };
                    return self.finish(Duration::ZERO, PollOutcome::Failed(error));
                }
                self.config.interval
            }
            Observation::Unavailable(error) if error.is_transient() => {
                self.config.transport_backoff
            }
            Observation::Unavailable(error) => {
                return self.finish(Duration::ZERO, PollOutcome::Failed(error));
            }
        };

        if attempt >= self.config.max_attempts {
            let error = PipelineError::BackendFailure {
                kind: FailureKind::Timeout,
                message: format!(
                    "Flashcard generation is taking too long (no result after {attempt} status checks). Please try again later."
                ),
            };
            return self.finish(Duration::ZERO, PollOutcome::Failed(error));
        }

        self.state = PollState::Polling {
            attempt: attempt + 1,
        };
        Step::PollAfter(retry_after)
    }

    fn finish(&mut self, delay: Duration, outcome: PollOutcome) -> Step {
        self.state = PollState::Terminal(outcome.clone());
        Step::Finish { delay, outcome }
    }

    /// Polls until a terminal outcome or cancellation.
    ///
    /// * `fetch` is called with the attempt number and must resolve to the
    ///   job's current status. Polls never overlap: the next call starts only
    ///   after the previous one resolved and the follow-up wait elapsed.
    /// * `sleep` waits for the given duration.
    /// * `on_status` sees every status that was fetched while not cancelled.
    ///
    /// Returns `None` when `cancel` fired; in that case neither the machine
    /// nor `on_status` observed anything after the cancellation.
    pub async fn run<F, Fut, S, SFut, U>(
        &mut self,
        cancel: &CancelToken,
        mut fetch: F,
        mut sleep: S,
        mut on_status: U,
    ) -> Option<PollOutcome>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<StatusReport, PipelineError>>,
        S: FnMut(Duration) -> SFut,
        SFut: Future<Output = ()>,
        U: FnMut(&StatusReport),
    {
        self.begin();
        loop {
            if cancel.is_cancelled() {
                return None;
            }
            let attempt = self.attempt()?;
            let fetched = fetch(attempt).await;
            if cancel.is_cancelled() {
                return None;
            }

            let observation = match fetched {
                Ok(report) => {
                    on_status(&report);
                    Observation::Status(report)
                }
                Err(error) => Observation::Unavailable(error),
            };

            match self.observe(observation) {
                Step::PollAfter(delay) => sleep(delay).await,
                Step::Finish { delay, outcome } => {
                    if !delay.is_zero() {
                        sleep(delay).await;
                    }
                    if cancel.is_cancelled() {
                        return None;
                    }
                    return Some(outcome);
                }
            }
        }
    }
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new(PollConfig::default())
    }
}
