use super::types::{Disk, DiskAttributes, DiskState, DiskType, DEFAULT_SECTOR_SIZE};
use crate::topology::{HardwareNode, NodeClass};
use serde::{Deserialize, Serialize};

/// Sector size keys tried, in order, for NVMe namespaces
pub(crate) const NVME_SECTOR_KEYS: [&str; 3] = ["logicalsectorsize", "sectorsize", "logicalblocksize"];

/// Sector size key used for every other disk type
pub(crate) const SECTOR_KEYS: [&str; 1] = ["logicalsectorsize"];

/// What to do with a SATA node that reports no sector size at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SataSectorPolicy {
    /// Skip the node (optical drives and card readers without media)
    #[default]
    Reject,
    /// Keep the node with the default sector size
    AssumeDefault,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub sata_sector_policy: SataSectorPolicy,
    pub default_sector_size: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sata_sector_policy: SataSectorPolicy::Reject,
            default_sector_size: DEFAULT_SECTOR_SIZE,
        }
    }
}

/// Walks a hardware topology and turns disk nodes into typed records
#[derive(Debug, Clone, Default)]
pub struct DiskClassifier {
    config: ClassifierConfig,
}

impl DiskClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify every disk below `root`, depth-first pre-order.
    ///
    /// Never fails: odd nodes are defaulted or skipped so one bad device
    /// doesn't hide the others.
    pub fn classify<N: HardwareNode>(&self, root: &N) -> Vec<Disk> {
        let mut disks = Vec::new();
        self.walk(root, None, &mut disks);

        tracing::info!(count = disks.len(), "Disk classification complete");
        disks
    }

    fn walk<N: HardwareNode>(&self, node: &N, parent: Option<&N>, disks: &mut Vec<Disk>) {
        if node.class() == NodeClass::Disk {
            // Disk nodes never have disk descendants
            self.evaluate(node, parent, disks);
            return;
        }

        for child in node.children() {
            self.walk(child, Some(node), disks);
        }
    }

    fn evaluate<N: HardwareNode>(&self, node: &N, parent: Option<&N>, disks: &mut Vec<Disk>) {
        let path = node.logical_name();
        let disk_type = Self::determine_disk_type(path, node.bus_info());

        if disk_type == DiskType::NotADisk {
            tracing::debug!(path = %path, "Skipping non-disk node");
            return;
        }

        if disks.iter().any(|d| d.path() == path) {
            tracing::debug!(path = %path, "Skipping duplicate disk path");
            return;
        }

        if let Some(disk) = self.build_disk(node, parent, disk_type) {
            tracing::debug!(
                path = %disk.path(),
                disk_type = %disk_type,
                variant = disk.variant_name(),
                sector_size = disk.sector_size(),
                "Classified disk"
            );
            disks.push(disk);
        }
    }

    /// Decide the disk type from the logical path, first matching rule wins
    pub fn determine_disk_type(logical_name: &str, bus_info: &str) -> DiskType {
        if logical_name.is_empty() {
            return DiskType::Indeterminate;
        }
        if logical_name.contains("hwmon") {
            return DiskType::NotADisk;
        }
        if logical_name.starts_with("/dev/ng") || logical_name.starts_with("/dev/loop") {
            return DiskType::NotADisk;
        }
        if logical_name.starts_with("/dev/nvme") {
            // The controller node itself has no namespace suffix
            return if logical_name.contains("n1") {
                DiskType::NVMe
            } else {
                DiskType::NotADisk
            };
        }
        if logical_name.starts_with("/dev/sd") {
            return if bus_info.contains("usb") {
                DiskType::USB
            } else {
                DiskType::SATA
            };
        }

        const PREFIXES: [(&str, DiskType); 4] = [
            ("/dev/hd", DiskType::PATA),
            ("/dev/mmcblk", DiskType::MMC),
            ("/dev/vd", DiskType::VirtIO),
            ("/dev/xvd", DiskType::VirtXen),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| logical_name.starts_with(prefix))
            .map(|(_, disk_type)| *disk_type)
            .unwrap_or(DiskType::Indeterminate)
    }

    /// First value of each key in turn; the first non-empty one that parses
    /// to a positive integer wins.
    pub(crate) fn resolve_sector_size<N: HardwareNode>(node: &N, keys: &[&str]) -> Option<u64> {
        keys.iter()
            .filter_map(|key| node.config(key).first())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .find_map(|value| value.parse::<u64>().ok().filter(|size| *size > 0))
    }

    /// Whether any non-empty sector size value is present, parseable or not
    pub(crate) fn has_sector_signal<N: HardwareNode>(node: &N, keys: &[&str]) -> bool {
        keys.iter()
            .flat_map(|key| node.config(key))
            .any(|value| !value.trim().is_empty())
    }

    fn build_disk<N: HardwareNode>(
        &self,
        node: &N,
        parent: Option<&N>,
        disk_type: DiskType,
    ) -> Option<Disk> {
        let fallback = self.config.default_sector_size;

        if disk_type == DiskType::NVMe {
            // Namespaces carry geometry, the controller carries identity
            let identity = parent.unwrap_or(node);
            let sector_size =
                Self::resolve_sector_size(node, &NVME_SECTOR_KEYS).unwrap_or(fallback);

            return Some(Disk::nvme(DiskAttributes::new(
                identity.serial(),
                identity.vendor(),
                identity.product(),
                node.logical_name(),
                node.description(),
                node.size(),
                sector_size,
                disk_type,
            )));
        }

        if disk_type == DiskType::SATA
            && self.config.sata_sector_policy == SataSectorPolicy::Reject
            && !Self::has_sector_signal(node, &SECTOR_KEYS)
        {
            tracing::debug!(
                path = %node.logical_name(),
                "Ignoring SATA device without sector information"
            );
            return None;
        }

        let sector_size = Self::resolve_sector_size(node, &SECTOR_KEYS).unwrap_or(fallback);
        let attributes = DiskAttributes::new(
            node.serial(),
            node.vendor(),
            node.product(),
            node.logical_name(),
            node.description(),
            node.size(),
            sector_size,
            disk_type,
        );

        Some(match disk_type {
            DiskType::SATA | DiskType::PATA => Disk::ata(attributes, DiskState::Ready),
            DiskType::USB => Disk::usb(attributes),
            _ => Disk::base(attributes),
        })
    }
}
