//! Job poller
//!
//! Waits for a submitted job to finish by re-checking its status on the
//! backoff schedule. Only the calling item pipeline is suspended.

use std::sync::Arc;
use std::time::Duration;
use timeside_client::{ClientError, RemoteClient};
use timeside_core::domain::job::{Job, JobStatus};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::backoff::BackoffSchedule;

/// How non-`Done` statuses are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollPolicy {
    /// Stop as soon as the server reports `Failed`
    ///
    /// Off by default: a failed job is polled like a pending one until the
    /// schedule runs out.
    pub stop_on_failed: bool,
}

/// How polling ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Done,
    /// Schedule exhausted before the job reached `Done`
    TimedOut,
    /// Server reported `Failed` (only with [`PollPolicy::stop_on_failed`])
    Failed,
}

/// Result of waiting on one job
#[derive(Debug, Clone)]
pub struct PollReport {
    pub job_id: Uuid,
    pub outcome: PollOutcome,
    /// Last status actually received
    pub last_status: Option<JobStatus>,
    /// Number of status checks performed
    pub checks: usize,
    /// Wall-clock time from the first check to the outcome
    pub elapsed: Duration,
}

/// Polls jobs with progressive backoff
#[derive(Clone)]
pub struct JobPoller {
    client: Arc<dyn RemoteClient>,
    schedule: BackoffSchedule,
    policy: PollPolicy,
}

impl JobPoller {
    pub fn new(client: Arc<dyn RemoteClient>, schedule: BackoffSchedule, policy: PollPolicy) -> Self {
        Self {
            client,
            schedule,
            policy,
        }
    }

    /// Polls `job` until it is done or the schedule is exhausted
    ///
    /// The stop decision is taken right after each check, so a `Done` job is
    /// never followed by a sleep. A timeout is an outcome, not an error: the
    /// only error returned is a failure of the very first check. Later
    /// failures count as "not done yet".
    pub async fn await_terminal(&self, job: &Job) -> Result<PollReport, ClientError> {
        let started = Instant::now();
        let mut attempt = 0;
        let mut last_status = None;

        loop {
            match self.client.retrieve_job(job.id).await {
                Ok(current) => {
                    last_status = Some(current.status);

                    if current.status.is_done() {
                        info!(
                            job_id = %job.id,
                            checks = attempt + 1,
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "Job done"
                        );
                        return Ok(self.report(job, PollOutcome::Done, last_status, attempt, started));
                    }

                    if self.policy.stop_on_failed && current.status.is_failed() {
                        warn!(job_id = %job.id, checks = attempt + 1, "Job reported failed");
                        return Ok(self.report(job, PollOutcome::Failed, last_status, attempt, started));
                    }
                }
                Err(e) if attempt == 0 => {
                    warn!(job_id = %job.id, error = %e, "Unable to get job status");
                    return Err(e);
                }
                Err(e) => {
                    warn!(job_id = %job.id, attempt, error = %e, "Status check failed, will retry");
                }
            }

            let Some(delay) = self.schedule.delay(attempt) else {
                warn!(
                    job_id = %job.id,
                    checks = attempt + 1,
                    status = ?last_status,
                    "Unable to get result, giving up"
                );
                return Ok(self.report(job, PollOutcome::TimedOut, last_status, attempt, started));
            };

            debug!(
                job_id = %job.id,
                attempt,
                status = ?last_status,
                delay_ms = delay.as_millis() as u64,
                "Job not done yet"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn report(
        &self,
        job: &Job,
        outcome: PollOutcome,
        last_status: Option<JobStatus>,
        attempt: usize,
        started: Instant,
    ) -> PollReport {
        PollReport {
            job_id: job.id,
            outcome,
            last_status,
            checks: attempt + 1,
            elapsed: started.elapsed(),
        }
    }
}
