// Allow uppercase acronyms for industry-standard terms like NVMe, SATA, USB
#![allow(clippy::upper_case_acronyms)]

pub mod algorithms;
pub mod drives;
pub mod erase_orchestrator;
pub mod settings;
pub mod topology;
pub mod ui;

pub use algorithms::{DryRunBackend, EraseBackend, EraseReport, EraseStrategy};
pub use drives::{Disk, DiskClassifier, DiskState, DiskType};
pub use erase_orchestrator::EraseOrchestrator;
pub use settings::AppConfig;
pub use topology::{HardwareNode, HwNode, LshwScanner, NodeClass};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Drive is frozen and cannot be modified: {0}")]
    DriveFrozen(String),

    #[error("Hardware command failed: {0}")]
    HardwareCommandFailed(String),

    #[error("Hardware topology error: {0}")]
    Topology(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl From<config::ConfigError> for DriveError {
    fn from(err: config::ConfigError) -> Self {
        DriveError::Config(err.to_string())
    }
}

pub type DriveResult<T> = Result<T, DriveError>;

/// One erase run over a set of disks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraseSession {
    pub session_id: String,
    pub strategy: EraseStrategy,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub outcomes: Vec<DiskEraseOutcome>,
}

impl EraseSession {
    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == EraseStatus::Completed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == EraseStatus::Failed)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskEraseOutcome {
    pub path: String,
    pub status: EraseStatus,
    pub report: Option<EraseReport>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EraseStatus {
    Completed,
    Failed,
}
