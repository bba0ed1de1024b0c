// Erase command boundary
//
// Strategies never touch devices themselves; they call out through
// `EraseBackend`. A failed call must come back as an error so the caller's
// disk record is left as it was.

use super::gutmann::GutmannPass;
use crate::DriveResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Firmware-level erase command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecureEraseMethod {
    /// ATA SECURITY ERASE UNIT
    AtaSecurityErase,
    /// NVMe Format NVM with user data erase
    NvmeFormat,
}

impl fmt::Display for SecureEraseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecureEraseMethod::AtaSecurityErase => f.write_str("ATA security erase"),
            SecureEraseMethod::NvmeFormat => f.write_str("NVMe format"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait EraseBackend {
    /// Clear the ATA security freeze lock on `device_path`
    fn unfreeze(&self, device_path: &str) -> DriveResult<()>;

    fn secure_erase(&self, device_path: &str, method: SecureEraseMethod) -> DriveResult<()>;

    /// Overwrite the whole device once per entry in `passes`
    fn overwrite(&self, device_path: &str, sector_size: u64, passes: &[GutmannPass]) -> DriveResult<()>;
}

/// Backend that only logs what it would do. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunBackend;

impl EraseBackend for DryRunBackend {
    fn unfreeze(&self, device_path: &str) -> DriveResult<()> {
        tracing::info!(device = %device_path, dry_run = true, "Would unfreeze drive");
        Ok(())
    }

    fn secure_erase(&self, device_path: &str, method: SecureEraseMethod) -> DriveResult<()> {
        tracing::info!(device = %device_path, method = %method, dry_run = true, "Would issue secure erase");
        Ok(())
    }

    fn overwrite(&self, device_path: &str, sector_size: u64, passes: &[GutmannPass]) -> DriveResult<()> {
        tracing::info!(
            device = %device_path,
            sector_size,
            passes = passes.len(),
            dry_run = true,
            "Would overwrite drive"
        );
        for (index, pass) in passes.iter().enumerate() {
            tracing::trace!(device = %device_path, pass = index + 1, pattern = %pass, "Overwrite pass");
        }
        Ok(())
    }
}
