// Disk taxonomy
//
// A closed sum type over the disk variants. Every variant shares the same
// attribute payload; only ATA disks carry a freeze state.

use crate::algorithms::{EraseBackend, EraseReport, EraseStrategy};
use crate::DriveResult;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DEFAULT_SECTOR_SIZE: u64 = 512;

/// Disk type tag derived from a node's logical path and bus info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiskType {
    NVMe,
    USB,
    SATA,
    PATA,
    MMC,
    VirtIO,
    VirtXen,
    Indeterminate,
    NotADisk,
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiskType::NVMe => "NVMe",
            DiskType::USB => "USB",
            DiskType::SATA => "SATA",
            DiskType::PATA => "PATA",
            DiskType::MMC => "MMC",
            DiskType::VirtIO => "VirtIO",
            DiskType::VirtXen => "Xen",
            DiskType::Indeterminate => "Unknown",
            DiskType::NotADisk => "Not a disk",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiskState {
    #[default]
    Ready,
    Frozen,
}

impl fmt::Display for DiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskState::Ready => f.write_str("Ready"),
            DiskState::Frozen => f.write_str("Frozen"),
        }
    }
}

/// Identity and geometry shared by every disk variant.
///
/// Fields are private so identity stays fixed after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskAttributes {
    serial: String,
    vendor: String,
    model: String,
    path: String,
    description: String,
    size: u64,
    #[serde(deserialize_with = "deserialize_sector_size")]
    sector_size: u64,
    disk_type: DiskType,
}

fn nonzero_sector_size(sector_size: u64) -> u64 {
    if sector_size == 0 {
        DEFAULT_SECTOR_SIZE
    } else {
        sector_size
    }
}

fn deserialize_sector_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(nonzero_sector_size)
}

impl DiskAttributes {
    /// A zero `sector_size` is replaced by [`DEFAULT_SECTOR_SIZE`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        serial: impl Into<String>,
        vendor: impl Into<String>,
        model: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
        size: u64,
        sector_size: u64,
        disk_type: DiskType,
    ) -> Self {
        Self {
            serial: serial.into(),
            vendor: vendor.into(),
            model: model.into(),
            path: path.into(),
            description: description.into(),
            size,
            sector_size: nonzero_sector_size(sector_size),
            disk_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtaDisk {
    #[serde(flatten)]
    attributes: DiskAttributes,
    state: DiskState,
}

/// A classified disk record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum Disk {
    Base(DiskAttributes),
    Ata(AtaDisk),
    Nvme(DiskAttributes),
    Usb(DiskAttributes),
}

impl Disk {
    pub fn base(attributes: DiskAttributes) -> Self {
        Disk::Base(attributes)
    }

    pub fn ata(attributes: DiskAttributes, state: DiskState) -> Self {
        Disk::Ata(AtaDisk { attributes, state })
    }

    pub fn nvme(attributes: DiskAttributes) -> Self {
        Disk::Nvme(attributes)
    }

    pub fn usb(attributes: DiskAttributes) -> Self {
        Disk::Usb(attributes)
    }

    pub fn attributes(&self) -> &DiskAttributes {
        match self {
            Disk::Base(a) | Disk::Nvme(a) | Disk::Usb(a) => a,
            Disk::Ata(ata) => &ata.attributes,
        }
    }

    pub fn serial(&self) -> &str {
        &self.attributes().serial
    }

    pub fn vendor(&self) -> &str {
        &self.attributes().vendor
    }

    pub fn model(&self) -> &str {
        &self.attributes().model
    }

    pub fn path(&self) -> &str {
        &self.attributes().path
    }

    pub fn description(&self) -> &str {
        &self.attributes().description
    }

    pub fn size(&self) -> u64 {
        self.attributes().size
    }

    pub fn sector_size(&self) -> u64 {
        self.attributes().sector_size
    }

    pub fn disk_type(&self) -> DiskType {
        self.attributes().disk_type
    }

    pub fn sector_count(&self) -> u64 {
        self.size() / self.sector_size()
    }

    /// Variants without a lock concept are always `Ready`
    pub fn state(&self) -> DiskState {
        match self {
            Disk::Ata(ata) => ata.state,
            _ => DiskState::Ready,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state() == DiskState::Frozen
    }

    /// Frozen -> Ready. No-op when already ready or not an ATA disk.
    pub fn unfreeze(&mut self) {
        if let Disk::Ata(ata) = self {
            if ata.state == DiskState::Frozen {
                tracing::debug!(path = %ata.attributes.path, "Disk state Frozen -> Ready");
                ata.state = DiskState::Ready;
            }
        }
    }

    /// Short name of the concrete variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            Disk::Base(_) => "Disk",
            Disk::Ata(_) => "ATADisk",
            Disk::Nvme(_) => "NVMeDisk",
            Disk::Usb(_) => "USBDisk",
        }
    }

    /// Run `strategy` against this disk, letting it drive state transitions
    pub fn erase(
        &mut self,
        strategy: EraseStrategy,
        backend: &dyn EraseBackend,
    ) -> DriveResult<EraseReport> {
        let procedure = strategy.procedure_for(self);
        procedure(self, backend)
    }
}
