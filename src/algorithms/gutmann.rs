// Gutmann-style multi-pass overwrite
//
// 35 passes: four random, 27 fixed patterns aimed at MFM and RLL(2,7)
// encodings, then four random again.

use super::backend::EraseBackend;
use super::{EraseAction, EraseReport, EraseStrategy};
use crate::drives::{Disk, FreezeMitigation};
use crate::DriveResult;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutmannPass {
    Random,
    Pattern(&'static [u8]),
}

impl fmt::Display for GutmannPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GutmannPass::Random => f.write_str("random"),
            GutmannPass::Pattern(bytes) => {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{:#04X}", b)).collect();
                f.write_str(&hex.join(" "))
            }
        }
    }
}

use GutmannPass::{Pattern as P, Random as R};

#[rustfmt::skip]
pub const GUTMANN_PASSES: [GutmannPass; 35] = [
    R, R, R, R,
    P(&[0x55]), P(&[0xAA]),
    P(&[0x92, 0x49, 0x24]), P(&[0x49, 0x24, 0x92]), P(&[0x24, 0x92, 0x49]),
    P(&[0x00]), P(&[0x11]), P(&[0x22]), P(&[0x33]),
    P(&[0x44]), P(&[0x55]), P(&[0x66]), P(&[0x77]),
    P(&[0x88]), P(&[0x99]), P(&[0xAA]), P(&[0xBB]),
    P(&[0xCC]), P(&[0xDD]), P(&[0xEE]), P(&[0xFF]),
    P(&[0x92, 0x49, 0x24]), P(&[0x49, 0x24, 0x92]), P(&[0x24, 0x92, 0x49]),
    P(&[0x6D, 0xB6, 0xDB]), P(&[0xB6, 0xDB, 0x6D]), P(&[0xDB, 0x6D, 0xB6]),
    R, R, R, R,
];

/// ATA: clear a freeze lock first, then overwrite
pub(crate) fn erase_ata(disk: &mut Disk, backend: &dyn EraseBackend) -> DriveResult<EraseReport> {
    let was_frozen = disk.is_frozen();
    FreezeMitigation::ensure_unfrozen(disk, backend)?;

    run_passes(disk, backend)?;
    Ok(overwrite_report(disk).with_unfrozen(was_frozen).emit())
}

/// NVMe and everything else: no lock state, overwrite directly
pub(crate) fn overwrite(disk: &mut Disk, backend: &dyn EraseBackend) -> DriveResult<EraseReport> {
    run_passes(disk, backend)?;
    Ok(overwrite_report(disk).emit())
}

fn run_passes(disk: &Disk, backend: &dyn EraseBackend) -> DriveResult<()> {
    tracing::info!(
        path = %disk.path(),
        model = %disk.model(),
        passes = GUTMANN_PASSES.len(),
        "Gutmann method erasing disk"
    );

    backend.overwrite(disk.path(), disk.sector_size(), &GUTMANN_PASSES)
}

fn overwrite_report(disk: &Disk) -> EraseReport {
    EraseReport::new(
        disk,
        EraseStrategy::Gutmann,
        EraseAction::Overwrite {
            passes: GUTMANN_PASSES.len(),
        },
    )
}
