use super::backend::{EraseBackend, SecureEraseMethod};
use super::{EraseAction, EraseReport, EraseStrategy};
use crate::drives::{Disk, FreezeMitigation};
use crate::DriveResult;

/// Disks without a firmware erase path: report identity and geometry only
pub(crate) fn report_only(disk: &mut Disk, _backend: &dyn EraseBackend) -> DriveResult<EraseReport> {
    Ok(EraseReport::new(disk, EraseStrategy::SecureErase, EraseAction::ReportOnly).emit())
}

pub(crate) fn erase_ata(disk: &mut Disk, backend: &dyn EraseBackend) -> DriveResult<EraseReport> {
    let was_frozen = disk.is_frozen();
    FreezeMitigation::ensure_unfrozen(disk, backend)?;

    backend.secure_erase(disk.path(), SecureEraseMethod::AtaSecurityErase)?;

    let report = EraseReport::new(
        disk,
        EraseStrategy::SecureErase,
        EraseAction::SecureErase {
            method: SecureEraseMethod::AtaSecurityErase,
        },
    )
    .with_unfrozen(was_frozen);
    Ok(report.emit())
}

pub(crate) fn erase_nvme(disk: &mut Disk, backend: &dyn EraseBackend) -> DriveResult<EraseReport> {
    backend.secure_erase(disk.path(), SecureEraseMethod::NvmeFormat)?;

    Ok(EraseReport::new(
        disk,
        EraseStrategy::SecureErase,
        EraseAction::SecureErase {
            method: SecureEraseMethod::NvmeFormat,
        },
    )
    .emit())
}
