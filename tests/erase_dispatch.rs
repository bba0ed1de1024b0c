//! Erase dispatch integration tests
//!
//! Classified disks are erased through a recording backend so the exact
//! command sequence per disk variant can be checked.

use disk_erase::algorithms::SecureEraseMethod;
use disk_erase::drives::DiskAttributes;
use disk_erase::erase_orchestrator::EraseOrchestrator;
use disk_erase::{Disk, DiskClassifier, DiskState, DiskType, DriveError, EraseStatus, EraseStrategy};

#[path = "common/mod.rs"]
mod common;

use common::recording_backend::{Call, RecordingBackend};
use common::topologies::workstation;

fn frozen_ata(path: &str) -> Disk {
    Disk::ata(
        DiskAttributes::new("WD-1", "WD", "Blue", path, "ATA Disk", 1 << 20, 512, DiskType::SATA),
        DiskState::Frozen,
    )
}

#[test]
fn test_secure_erase_workstation() {
    let mut disks = DiskClassifier::default().classify(&workstation());
    let orchestrator = EraseOrchestrator::new(EraseStrategy::SecureErase, RecordingBackend::new());

    let session = orchestrator.erase_all(&mut disks);

    // the USB stick has no firmware erase path and is only reported
    assert_eq!(session.completed(), 3);
    assert_eq!(
        orchestrator.backend().calls(),
        vec![
            Call::SecureErase("/dev/nvme0n1".to_string(), SecureEraseMethod::NvmeFormat),
            Call::SecureErase("/dev/sda".to_string(), SecureEraseMethod::AtaSecurityErase),
        ]
    );
}

#[test]
fn test_gutmann_workstation() {
    let mut disks = DiskClassifier::default().classify(&workstation());
    let orchestrator = EraseOrchestrator::new(EraseStrategy::Gutmann, RecordingBackend::new());

    let session = orchestrator.erase_all(&mut disks);

    assert_eq!(session.completed(), 3);
    assert_eq!(
        orchestrator.backend().calls(),
        vec![
            Call::Overwrite {
                path: "/dev/nvme0n1".to_string(),
                sector_size: 512,
                passes: 35
            },
            Call::Overwrite {
                path: "/dev/sda".to_string(),
                sector_size: 512,
                passes: 35
            },
            Call::Overwrite {
                path: "/dev/sdb".to_string(),
                sector_size: 512,
                passes: 35
            },
        ]
    );
}

#[test]
fn test_frozen_ata_is_unfrozen_before_overwrite() {
    let mut disk = frozen_ata("/dev/sda");
    let backend = RecordingBackend::new();

    let report = disk.erase(EraseStrategy::Gutmann, &backend).unwrap();

    assert_eq!(disk.state(), DiskState::Ready);
    assert!(report.unfrozen);
    assert_eq!(backend.calls()[0], Call::Unfreeze("/dev/sda".to_string()));
    assert!(matches!(backend.calls()[1], Call::Overwrite { .. }));
}

#[test]
fn test_refused_unfreeze_leaves_disk_frozen() {
    let mut disks = vec![frozen_ata("/dev/sda"), frozen_ata("/dev/sdb")];
    let orchestrator = EraseOrchestrator::new(EraseStrategy::SecureErase, RecordingBackend::refusing_unfreeze());

    let session = orchestrator.erase_all(&mut disks);

    assert_eq!(session.failed(), 2);
    assert!(disks.iter().all(Disk::is_frozen));
    assert!(orchestrator
        .backend()
        .calls()
        .iter()
        .all(|call| matches!(call, Call::Unfreeze(_))));

    let message = session.outcomes[0].error_message.as_deref().unwrap();
    assert!(message.contains("frozen"));
}

#[test]
fn test_failure_on_one_disk_does_not_stop_the_rest() {
    let mut disks = DiskClassifier::default().classify(&workstation());
    let orchestrator = EraseOrchestrator::new(EraseStrategy::Gutmann, RecordingBackend::failing_on("/dev/sda"));

    let session = orchestrator.erase_all(&mut disks);

    let statuses: Vec<EraseStatus> = session.outcomes.iter().map(|o| o.status).collect();
    assert_eq!(statuses, [EraseStatus::Completed, EraseStatus::Failed, EraseStatus::Completed]);
    assert!(session.outcomes[1].report.is_none());
}

#[test]
fn test_direct_erase_of_failing_disk_returns_error() {
    let mut disk = frozen_ata("/dev/sdz");
    let backend = RecordingBackend::failing_on("/dev/sdz");

    let err = disk.erase(EraseStrategy::SecureErase, &backend).unwrap_err();

    // unfreeze fails first and is reported as a freeze problem
    assert!(matches!(err, DriveError::DriveFrozen(_)));
    assert!(disk.is_frozen());
}

#[test]
fn test_report_carries_disk_identity() {
    let mut disks = DiskClassifier::default().classify(&workstation());
    let orchestrator = EraseOrchestrator::new(EraseStrategy::SecureErase, RecordingBackend::new());

    let session = orchestrator.erase_all(&mut disks);
    let report = session.outcomes[0].report.as_ref().unwrap();

    assert_eq!(report.serial, "S5GXNF0R123456");
    assert_eq!(report.model, "Samsung SSD 980 PRO 1TB");
    assert_eq!(report.path, "/dev/nvme0n1");
    assert_eq!(report.sector_count, 1_953_525_168);
    assert_eq!(report.variant, "NVMeDisk");
}
