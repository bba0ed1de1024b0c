// ATA freeze precondition
//
// Host firmware may leave an ATA disk security-frozen. Erasure is only
// allowed once the disk is back in `Ready`.

use super::types::Disk;
use crate::algorithms::EraseBackend;
use crate::{DriveError, DriveResult};

pub struct FreezeMitigation;

impl FreezeMitigation {
    /// Bring a frozen disk back to `Ready` before erasing.
    ///
    /// The record only transitions after the backend reports success, so a
    /// failed attempt leaves the disk `Frozen`.
    pub fn ensure_unfrozen(disk: &mut Disk, backend: &dyn EraseBackend) -> DriveResult<()> {
        if !disk.is_frozen() {
            return Ok(());
        }

        tracing::info!(path = %disk.path(), "Disk is frozen, attempting mitigation");

        backend.unfreeze(disk.path()).map_err(|e| match e {
            DriveError::DriveFrozen(_) => e,
            other => DriveError::DriveFrozen(format!(
                "Failed to unfreeze {}: {}",
                disk.path(),
                other
            )),
        })?;

        disk.unfreeze();
        tracing::info!(path = %disk.path(), "Disk unfrozen");
        Ok(())
    }
}
