pub mod backend;
pub mod gutmann;
pub mod secure_erase;


pub use backend::{DryRunBackend, EraseBackend, SecureEraseMethod};
pub use gutmann::{GutmannPass, GUTMANN_PASSES};

#[cfg(test)]
pub use backend::MockEraseBackend;

use crate::drives::{Disk, DiskState, DiskType};
use crate::{DriveError, DriveResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Erase procedure for one (strategy, disk variant) pair
pub type EraseProcedure = fn(&mut Disk, &dyn EraseBackend) -> DriveResult<EraseReport>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraseStrategy {
    /// Firmware secure erase where the device has one, report otherwise
    #[default]
    SecureErase,
    /// 35-pass overwrite
    Gutmann,
}

impl EraseStrategy {
    /// Pick the procedure for this strategy and the concrete disk variant
    pub fn procedure_for(&self, disk: &Disk) -> EraseProcedure {
        match (self, disk) {
            (EraseStrategy::SecureErase, Disk::Ata(_)) => secure_erase::erase_ata,
            (EraseStrategy::SecureErase, Disk::Nvme(_)) => secure_erase::erase_nvme,
            (EraseStrategy::SecureErase, Disk::Base(_) | Disk::Usb(_)) => secure_erase::report_only,
            (EraseStrategy::Gutmann, Disk::Ata(_)) => gutmann::erase_ata,
            (EraseStrategy::Gutmann, Disk::Nvme(_) | Disk::Base(_) | Disk::Usb(_)) => gutmann::overwrite,
        }
    }
}

impl fmt::Display for EraseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EraseStrategy::SecureErase => f.write_str("secure-erase"),
            EraseStrategy::Gutmann => f.write_str("gutmann"),
        }
    }
}

impl FromStr for EraseStrategy {
    type Err = DriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secure" | "secure-erase" | "secure_erase" | "direct" => Ok(EraseStrategy::SecureErase),
            "gutmann" | "multi-pass" | "multipass" => Ok(EraseStrategy::Gutmann),
            other => Err(DriveError::Unsupported(format!("Unknown erase strategy: {}", other))),
        }
    }
}

/// What a procedure actually asked of the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EraseAction {
    ReportOnly,
    SecureErase { method: SecureEraseMethod },
    Overwrite { passes: usize },
}

/// Structured record of one erase operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraseReport {
    pub strategy: EraseStrategy,
    pub action: EraseAction,
    pub variant: String,
    pub disk_type: DiskType,
    pub serial: String,
    pub model: String,
    pub path: String,
    pub description: String,
    pub size: u64,
    pub sector_size: u64,
    pub sector_count: u64,
    pub state: DiskState,
    pub unfrozen: bool,
    pub timestamp: DateTime<Utc>,
}

impl EraseReport {
    pub fn new(disk: &Disk, strategy: EraseStrategy, action: EraseAction) -> Self {
        Self {
            strategy,
            action,
            variant: disk.variant_name().to_string(),
            disk_type: disk.disk_type(),
            serial: disk.serial().to_string(),
            model: disk.model().to_string(),
            path: disk.path().to_string(),
            description: disk.description().to_string(),
            size: disk.size(),
            sector_size: disk.sector_size(),
            sector_count: disk.sector_count(),
            state: disk.state(),
            unfrozen: false,
            timestamp: Utc::now(),
        }
    }

    pub fn with_unfrozen(mut self, unfrozen: bool) -> Self {
        self.unfrozen = unfrozen;
        self
    }

    /// Log the report as a single structured event and hand it back
    pub fn emit(self) -> Self {
        tracing::info!(
            strategy = %self.strategy,
            action = ?self.action,
            variant = %self.variant,
            serial = %self.serial,
            model = %self.model,
            path = %self.path,
            description = %self.description,
            size = self.size,
            sector_count = self.sector_count,
            state = %self.state,
            unfrozen = self.unfrozen,
            "Disk erase"
        );
        self
    }
}
