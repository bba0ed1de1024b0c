// Erase Orchestrator - Runs the chosen strategy over classified disks
//
// Routing to a variant-specific procedure happens inside `Disk::erase`; this
// layer owns session bookkeeping and keeps going when one disk fails.

use crate::{
    algorithms::{EraseBackend, EraseReport, EraseStrategy},
    drives::Disk,
    DiskEraseOutcome, DriveResult, EraseSession, EraseStatus,
};
use chrono::Utc;
use uuid::Uuid;

pub struct EraseOrchestrator<B: EraseBackend> {
    strategy: EraseStrategy,
    backend: B,
    exclude_paths: Vec<String>,
}

impl<B: EraseBackend> EraseOrchestrator<B> {
    pub fn new(strategy: EraseStrategy, backend: B) -> Self {
        Self {
            strategy,
            backend,
            exclude_paths: Vec::new(),
        }
    }

    /// Never erase disks at these paths
    pub fn with_exclusions(mut self, paths: impl IntoIterator<Item = String>) -> Self {
        self.exclude_paths.extend(paths);
        self
    }

    pub fn strategy(&self) -> EraseStrategy {
        self.strategy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_excluded(&self, disk: &Disk) -> bool {
        self.exclude_paths.iter().any(|p| p == disk.path())
    }

    /// Erase a single disk with the configured strategy
    pub fn erase_one(&self, disk: &mut Disk) -> DriveResult<EraseReport> {
        tracing::info!(
            path = %disk.path(),
            variant = disk.variant_name(),
            strategy = %self.strategy,
            "Starting erase"
        );
        disk.erase(self.strategy, &self.backend)
    }

    /// Erase every disk in turn, recording one outcome per disk.
    ///
    /// Excluded disks are left out of the session entirely.
    pub fn erase_all(&self, disks: &mut [Disk]) -> EraseSession {
        let mut session = EraseSession {
            session_id: Uuid::new_v4().to_string(),
            strategy: self.strategy,
            start_time: Utc::now(),
            end_time: None,
            outcomes: Vec::with_capacity(disks.len()),
        };

        for disk in disks.iter_mut() {
            if self.is_excluded(disk) {
                tracing::info!(path = %disk.path(), "Skipping excluded disk");
                continue;
            }

            let outcome = match self.erase_one(disk) {
                Ok(report) => DiskEraseOutcome {
                    path: disk.path().to_string(),
                    status: EraseStatus::Completed,
                    report: Some(report),
                    error_message: None,
                },
                Err(e) => {
                    tracing::error!(path = %disk.path(), error = %e, "Erase failed");
                    DiskEraseOutcome {
                        path: disk.path().to_string(),
                        status: EraseStatus::Failed,
                        report: None,
                        error_message: Some(e.to_string()),
                    }
                }
            };
            session.outcomes.push(outcome);
        }

        session.end_time = Some(Utc::now());
        tracing::info!(
            session = %session.session_id,
            completed = session.completed(),
            failed = session.failed(),
            "Erase session finished"
        );
        session
    }
}
