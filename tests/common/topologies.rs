//! Hardware topology fixtures built with the `HwNode` builder

use disk_erase::{HwNode, NodeClass};
use std::path::PathBuf;

/// Path of a checked-in `lshw -json` capture
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn nvme_controller(index: u32, serial: &str, model: &str) -> HwNode {
    HwNode::new(NodeClass::Storage)
        .with_logical_name(format!("/dev/nvme{}", index))
        .with_serial(serial)
        .with_vendor("Samsung Electronics Co Ltd")
        .with_product(model)
        .with_description("NVMe device")
        .with_bus_info(format!("pci@0000:0{}:00.0", index + 1))
        .with_child(
            HwNode::disk(format!("/dev/nvme{}n1", index))
                .with_description("NVMe disk")
                .with_size(1_000_204_886_016)
                .with_config("logicalsectorsize", "512")
                .with_config("sectorsize", "512"),
        )
        .with_child(HwNode::disk(format!("/dev/ng{}n1", index)).with_description("NVMe disk"))
}

/// Workstation: one NVMe, one SATA SSD, a SATA optical drive without
/// sector information and a USB stick.
pub fn workstation() -> HwNode {
    let sata = HwNode::new(NodeClass::Storage)
        .with_description("SATA controller")
        .with_bus_info("pci@0000:00:17.0")
        .with_child(
            HwNode::disk("/dev/sda")
                .with_serial("WD-123")
                .with_vendor("Western Digital")
                .with_product("WDC WDS500G2B0A")
                .with_description("ATA Disk")
                .with_bus_info("scsi@0:0.0.0")
                .with_size(500_107_862_016)
                .with_config("logicalsectorsize", "512")
                .with_config("sectorsize", "4096"),
        )
        .with_child(
            HwNode::disk("/dev/sdc")
                .with_product("DVD+-RW GUD1N")
                .with_description("DVD-RAM writer")
                .with_bus_info("scsi@1:0.0.0"),
        );

    let usb = HwNode::new(NodeClass::Other)
        .with_description("Mass storage device")
        .with_bus_info("usb@2:1")
        .with_child(
            HwNode::disk("/dev/sdb")
                .with_serial("4C530001")
                .with_vendor("SanDisk")
                .with_product("Cruzer Blade")
                .with_description("SCSI Disk")
                .with_bus_info("scsi@6:0.0.0 usb")
                .with_size(16_008_609_792)
                .with_config("logicalsectorsize", "512"),
        );

    let hwmon = HwNode::disk("/sys/class/hwmon/hwmon2").with_description("temperature sensor");

    HwNode::new(NodeClass::Other)
        .with_description("Desktop Computer")
        .with_child(
            HwNode::new(NodeClass::Other)
                .with_description("Motherboard")
                .with_child(nvme_controller(0, "S5GXNF0R123456", "Samsung SSD 980 PRO 1TB"))
                .with_child(sata)
                .with_child(usb)
                .with_child(hwmon),
        )
}

/// Cloud guest with two virtio disks and a Xen disk
pub fn virtual_machine() -> HwNode {
    HwNode::new(NodeClass::Other)
        .with_description("Computer")
        .with_child(
            HwNode::new(NodeClass::Storage)
                .with_description("Virtio block device")
                .with_child(
                    HwNode::disk("/dev/vda")
                        .with_size(21_474_836_480)
                        .with_config("logicalsectorsize", "512"),
                )
                .with_child(HwNode::disk("/dev/vdb").with_size(10_737_418_240)),
        )
        .with_child(HwNode::disk("/dev/xvda").with_size(8_589_934_592))
}
