//! # Scheduler Feature
//!
//! Fires the digest and quiz jobs at fixed local wall-clock times. Each job
//! gets its own task; a run that fails is logged and the job simply waits for
//! its next slot. Nothing is retried.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Per-run ids and job reports in logs
//! - 1.0.0: Daily and weekly schedules

pub mod schedule;

pub use schedule::Schedule;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use log::{error, info};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Outcome of one job run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobReport {
    /// Users who were sent a message
    pub delivered: usize,
    /// Users left untouched this run
    pub skipped: usize,
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} delivered, {} skipped", self.delivered, self.skipped)
    }
}

/// A broadcast job the scheduler can trigger
#[async_trait]
pub trait ScheduledJob: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self) -> Result<JobReport>;
}

/// Owns the (schedule, job) pairs and spawns one timer task per pair
#[derive(Default)]
pub struct JobScheduler {
    jobs: Vec<(Schedule, Arc<dyn ScheduledJob>)>,
}

impl JobScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, schedule: Schedule, job: Arc<dyn ScheduledJob>) -> Self {
        self.jobs.push((schedule, job));
        self
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Spawn the timer tasks; they run until the runtime shuts down
    pub fn start(self) -> Vec<JoinHandle<()>> {
        self.jobs
            .into_iter()
            .map(|(schedule, job)| {
                info!("⏰ Scheduled '{}' {}", job.name(), schedule);
                tokio::spawn(run_on_schedule(schedule, job))
            })
            .collect()
    }
}

async fn run_on_schedule(schedule: Schedule, job: Arc<dyn ScheduledJob>) {
    loop {
        let now = Local::now();
        let next = schedule.next_after(&now);
        let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
        info!(
            "Next '{}' run at {} (in {}s)",
            job.name(),
            next.format("%Y-%m-%d %H:%M %Z"),
            wait.as_secs()
        );

        tokio::time::sleep(wait).await;
        run_once(job.as_ref()).await;
    }
}

/// Run a job a single time, logging its report or failure
pub async fn run_once(job: &dyn ScheduledJob) -> Option<JobReport> {
    let run_id = Uuid::new_v4();
    info!("[{run_id}] Starting '{}'", job.name());

    match job.run().await {
        Ok(report) => {
            info!("[{run_id}] '{}' finished: {report}", job.name());
            Some(report)
        }
        Err(e) => {
            error!("[{run_id}] '{}' aborted: {e}", job.name());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingJob {
        runs: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ScheduledJob for CountingJob {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn run(&self) -> Result<JobReport> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("boom");
            }
            Ok(JobReport {
                delivered: 3,
                skipped: 1,
            })
        }
    }

    #[tokio::test]
    async fn test_run_once_returns_report() {
        let job = CountingJob {
            runs: AtomicUsize::new(0),
            fail: false,
        };
        let report = run_once(&job).await.unwrap();
        assert_eq!(report.delivered, 3);
        assert_eq!(report.to_string(), "3 delivered, 1 skipped");
        assert_eq!(job.runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_once_absorbs_failure() {
        let job = CountingJob {
            runs: AtomicUsize::new(0),
            fail: true,
        };
        assert!(run_once(&job).await.is_none());
        assert_eq!(job.runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_scheduler_collects_jobs() {
        let job: Arc<dyn ScheduledJob> = Arc::new(CountingJob {
            runs: AtomicUsize::new(0),
            fail: false,
        });
        let scheduler = JobScheduler::new()
            .add(Schedule::parse("09:00").unwrap(), job.clone())
            .add(Schedule::parse("sun 10:00").unwrap(), job);
        assert_eq!(scheduler.len(), 2);
        assert!(JobScheduler::new().is_empty());
    }
}
