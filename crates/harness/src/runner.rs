// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The execution attempt orchestrator.
//!
//! One runner supervises one bot run: it invokes the task body, retries
//! failures under the configured [`RetryPolicy`], captures telemetry, and
//! publishes the run log to the tracker and (when configured) the document
//! store. Execution is a single sequential flow; every remote call blocks
//! until it returns.

use crate::error::HarnessError;
use crate::resolver::FolderResolver;
use crate::run_logger::RunLogger;
use crate::uploader::Uploader;
use std::collections::HashMap;
use tracing::{error, info, warn};
use warden_adapters::{
    DbSink, DocStoreAdapter, ResourceSampler, TaskBody, TaskStatus, TrackerAdapter,
};
use warden_core::{
    format_execution_time, AttemptOutcome, AttemptRecord, BotConfig, Clock, ResourceSnapshot,
    RunPhase, RunRecord,
};

/// Parameterized insert for the automation-logs table. Param order matches
/// [`RunRecord::params`].
pub const RUN_INSERT_QUERY: &str = "INSERT INTO automation_runs \
    (bot_name, developer, sector, stakeholder, recurrence, execution_time, items_processed) \
    VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of items the successful attempt processed, if any.
    pub items_processed: Option<u64>,
    /// `DD:HH:MM:SS` duration of the successful attempt.
    pub execution_time: String,
    /// Resource usage captured right after the successful attempt.
    pub snapshot: ResourceSnapshot,
    /// Full attempt history, failures included.
    pub attempts: Vec<AttemptRecord>,
}

/// Supervises one bot run end to end.
///
/// The retry ceiling follows the "retries in addition to the first
/// attempt" convention: `retry.max_retries = 2` permits three task
/// invocations in total (see [`warden_core::RetryPolicy`]).
pub struct BotRunner<T, D, Q, S, C>
where
    T: TrackerAdapter,
    D: DocStoreAdapter,
    Q: DbSink,
    S: ResourceSampler,
    C: Clock,
{
    config: BotConfig,
    task: Box<dyn TaskBody>,
    credentials: HashMap<String, String>,
    tracker: T,
    store: D,
    db: Q,
    sampler: S,
    clock: C,
    logger: RunLogger,
    history: Vec<AttemptRecord>,
    phase: RunPhase,
}

impl<T, D, Q, S, C> BotRunner<T, D, Q, S, C>
where
    T: TrackerAdapter,
    D: DocStoreAdapter,
    Q: DbSink,
    S: ResourceSampler,
    C: Clock,
{
    /// Create a runner; prepares the run log file for today.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: BotConfig,
        task: Box<dyn TaskBody>,
        credentials: HashMap<String, String>,
        tracker: T,
        store: D,
        db: Q,
        sampler: S,
        clock: C,
    ) -> Result<Self, HarnessError> {
        let logger =
            RunLogger::new(&config.log_dir, &config.bot_name).map_err(HarnessError::LogSetup)?;
        Ok(Self {
            config,
            task,
            credentials,
            tracker,
            store,
            db,
            sampler,
            clock,
            logger,
            history: Vec::new(),
            phase: RunPhase::Idle,
        })
    }

    /// Current phase of the run state machine.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Attempt history so far.
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// Path of the log artifact this run publishes.
    pub fn log_path(&self) -> &std::path::Path {
        self.logger.path()
    }

    /// Run the task to completion or exhaustion.
    ///
    /// Returns the summary of the successful attempt, or the task's own
    /// error once `max_retries` additional attempts have failed. Publish
    /// and reporting errors on the success path propagate as-is: a
    /// successful task execution can still end the run in error when its
    /// artifacts cannot be published.
    pub async fn run(&mut self) -> Result<RunSummary, HarnessError> {
        let execution = self.tracker.report_start().await?;
        info!(task_id = %execution.task_id, "task registered with tracker");
        if !execution.parameters.is_empty() {
            info!(parameters = ?execution.parameters, "task parameters");
        }

        let mut failures = 0u32;
        loop {
            let attempt = self.history.len() as u32;
            self.phase = RunPhase::Attempting;
            let started_at = self.clock.epoch_ms();
            info!(bot = %self.config.bot_name, attempt, "bot execution started");
            self.logger
                .append("info", &format!("Bot execution started. Attempt {attempt}"));

            let result = self.task.execute(&self.credentials).await;
            let elapsed = self.clock.elapsed_since(started_at);

            match result {
                Ok(items) => {
                    self.phase = RunPhase::Reporting;
                    self.history.push(AttemptRecord {
                        attempt,
                        started_at_epoch_ms: started_at,
                        elapsed,
                        outcome: AttemptOutcome::Success { items },
                    });

                    let execution_time = format_execution_time(elapsed);
                    let snapshot = self.sampler.sample();
                    info!(bot = %self.config.bot_name, attempt, "bot execution completed");
                    info!(%execution_time, "execution time");
                    info!(resource_usage = %snapshot, "resource usage at end of execution");
                    self.logger.append(
                        "info",
                        &format!(
                            "Bot execution completed on attempt {attempt}. \
                             Execution time: {execution_time}. Resource usage: {snapshot}"
                        ),
                    );

                    if self.config.use_document_store {
                        self.publish_log_artifact().await?;
                    }
                    self.record_database(items, &execution_time).await?;

                    let message = format!(
                        "Execution time: {execution_time}\nResource usage at end of execution: {snapshot}"
                    );
                    self.tracker
                        .finish(&execution.task_id, TaskStatus::Success, &message)
                        .await?;
                    self.post_attempt_log(&execution.task_id).await?;

                    self.phase = RunPhase::Completed;
                    return Ok(RunSummary {
                        items_processed: items,
                        execution_time,
                        snapshot,
                        attempts: self.history.clone(),
                    });
                }
                Err(task_err) => {
                    failures += 1;
                    self.phase = RunPhase::Retrying;
                    self.history.push(AttemptRecord {
                        attempt,
                        started_at_epoch_ms: started_at,
                        elapsed,
                        outcome: AttemptOutcome::Failure(task_err.to_string()),
                    });

                    error!(bot = %self.config.bot_name, attempt, error = %task_err, "bot execution failed");
                    self.logger.append(
                        "error",
                        &format!("An error occurred during bot execution: {task_err}"),
                    );

                    // Failure reporting is best-effort: the task's own
                    // error must never be masked by a reporting failure.
                    if let Err(report_err) = self
                        .tracker
                        .report_error(
                            &execution.task_id,
                            &task_err.to_string(),
                            &[self.logger.path().to_path_buf()],
                        )
                        .await
                    {
                        warn!(error = %report_err, "error report to tracker failed");
                    }
                    if let Err(finish_err) = self
                        .tracker
                        .finish(
                            &execution.task_id,
                            TaskStatus::Failed,
                            &format!("An error occurred during bot execution: {task_err}"),
                        )
                        .await
                    {
                        warn!(error = %finish_err, "failure status report to tracker failed");
                    }

                    if self.config.retry.is_exhausted(failures) {
                        error!(
                            max_retries = self.config.retry.max_retries,
                            "max retries reached, giving up"
                        );
                        self.logger.append(
                            "error",
                            &format!(
                                "Max retries reached ({}). Giving up.",
                                self.config.retry.max_retries
                            ),
                        );
                        if self.config.use_document_store {
                            // Final best-effort snapshot of the log.
                            if let Err(publish_err) = self.publish_log_artifact().await {
                                warn!(error = %publish_err, "final log publish failed");
                            }
                        }
                        if let Err(post_err) = self.post_attempt_log(&execution.task_id).await {
                            warn!(error = %post_err, "final log post to tracker failed");
                        }
                        self.phase = RunPhase::Exhausted;
                        return Err(HarnessError::Task(task_err));
                    }

                    if let Err(post_err) = self.post_attempt_log(&execution.task_id).await {
                        warn!(error = %post_err, "log post to tracker failed");
                    }
                    info!(next_attempt = attempt + 1, "retrying bot execution");
                }
            }
        }
    }

    /// Resolve the department folder, ensure the bot subfolder, and upload
    /// the current log artifact with collision-safe naming.
    async fn publish_log_artifact(&self) -> Result<(), HarnessError> {
        let resolver = FolderResolver::new(self.store.clone(), self.config.store_root.clone());
        let folder = resolver.resolve(&self.config.folder_prefix).await?;
        let target = resolver
            .ensure_bot_folder(&folder, &self.config.bot_name)
            .await?;
        let uploaded = Uploader::new(self.store.clone())
            .upload(&target, &[self.logger.path().to_path_buf()])
            .await?;
        info!(folder = %target, names = ?uploaded, "log artifact published to document store");
        Ok(())
    }

    /// Insert a run record when database logging is on and items were
    /// actually processed.
    async fn record_database(
        &self,
        items: Option<u64>,
        execution_time: &str,
    ) -> Result<(), HarnessError> {
        if !self.config.use_database {
            info!("database logging is disabled");
            return Ok(());
        }
        match items {
            None | Some(0) => {
                warn!("no items processed; skipping database record");
            }
            Some(count) => {
                info!(items_processed = count, "recording run in database");
                let record = RunRecord::new(&self.config, execution_time.to_string(), count);
                self.db.connect().await?;
                self.db.execute(RUN_INSERT_QUERY, &record.params()).await?;
                self.db.disconnect().await?;
            }
        }
        Ok(())
    }

    /// Post the current log artifact to the tracker. Runs after every
    /// attempt, success or failure.
    async fn post_attempt_log(&self, task_id: &str) -> Result<(), HarnessError> {
        self.tracker
            .post_artifact(task_id, self.logger.filename(), self.logger.path())
            .await?;
        info!(artifact = %self.logger.filename(), "log artifact posted to tracker");
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
