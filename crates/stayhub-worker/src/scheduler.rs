//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use stayhub_core::config::worker::WorkerConfig;
use stayhub_core::error::AppError;

use crate::jobs::{ReservationSweepJob, VerificationReportJob};

/// Cron-based scheduler for periodic background tasks.
pub struct MaintenanceScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Reservation sweep task.
    sweep: Arc<ReservationSweepJob>,
    /// Verification report task.
    report: Arc<VerificationReportJob>,
    /// Worker configuration.
    config: WorkerConfig,
}

impl std::fmt::Debug for MaintenanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceScheduler").finish()
    }
}

impl MaintenanceScheduler {
    /// Create a new scheduler.
    pub async fn new(
        config: WorkerConfig,
        sweep: Arc<ReservationSweepJob>,
        report: Arc<VerificationReportJob>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            sweep,
            report,
            config,
        })
    }

    /// Register all scheduled tasks.
    pub async fn register_tasks(&self) -> Result<(), AppError> {
        self.register_reservation_sweep().await?;
        self.register_verification_report().await?;

        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Maintenance scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Maintenance scheduler shut down");
        Ok(())
    }

    async fn register_reservation_sweep(&self) -> Result<(), AppError> {
        let sweep = Arc::clone(&self.sweep);
        let schedule = self.config.reservation_sweep_schedule.clone();

        let job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let sweep = Arc::clone(&sweep);
            Box::pin(async move {
                sweep.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create reservation sweep schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add reservation sweep schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: reservation_sweep");
        Ok(())
    }

    async fn register_verification_report(&self) -> Result<(), AppError> {
        let report = Arc::clone(&self.report);
        let schedule = self.config.verification_report_schedule.clone();

        let job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let report = Arc::clone(&report);
            Box::pin(async move {
                report.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create verification report schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add verification report schedule: {e}"))
        })?;

        info!(
            schedule = %self.config.verification_report_schedule,
            "Registered: verification_report"
        );
        Ok(())
    }
}
