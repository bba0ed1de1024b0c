// Hardware topology adapter
//
// The classifier only ever talks to the `HardwareNode` trait. `HwNode` is the
// owned in-memory tree used by the lshw adapter and by tests.

pub mod lshw;


pub use lshw::LshwScanner;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Coarse class tag of a topology node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    Disk,
    Storage,
    Other,
}

impl NodeClass {
    /// Map an lshw class string (`disk`, `storage`, `bus`, ...) onto a tag
    pub fn from_lshw(class: &str) -> Self {
        match class {
            "disk" => NodeClass::Disk,
            "storage" => NodeClass::Storage,
            _ => NodeClass::Other,
        }
    }
}

/// Read-only query surface of a hardware topology node.
///
/// The parent of a node is not exposed here: walkers hand the immediate
/// parent down as they descend.
pub trait HardwareNode: Sized {
    fn class(&self) -> NodeClass;
    fn logical_name(&self) -> &str;
    fn serial(&self) -> &str;
    fn vendor(&self) -> &str;
    fn product(&self) -> &str;
    fn description(&self) -> &str;
    fn size(&self) -> u64;
    fn bus_info(&self) -> &str;
    fn capabilities(&self) -> Vec<&str>;

    /// All values recorded for a configuration key, in source order
    fn config(&self, key: &str) -> &[String];

    fn children(&self) -> &[Self];

    fn has_capability(&self, capability: &str) -> bool {
        self.capabilities().iter().any(|c| *c == capability)
    }
}

/// Owned topology node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwNode {
    class: NodeClass,
    logical_name: String,
    serial: String,
    vendor: String,
    product: String,
    description: String,
    size: u64,
    bus_info: String,
    capabilities: BTreeSet<String>,
    configuration: BTreeMap<String, Vec<String>>,
    children: Vec<HwNode>,
}

impl HwNode {
    pub fn new(class: NodeClass) -> Self {
        Self {
            class,
            logical_name: String::new(),
            serial: String::new(),
            vendor: String::new(),
            product: String::new(),
            description: String::new(),
            size: 0,
            bus_info: String::new(),
            capabilities: BTreeSet::new(),
            configuration: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn disk(logical_name: impl Into<String>) -> Self {
        Self::new(NodeClass::Disk).with_logical_name(logical_name)
    }

    pub fn with_logical_name(mut self, name: impl Into<String>) -> Self {
        self.logical_name = name.into();
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = serial.into();
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_bus_info(mut self, bus_info: impl Into<String>) -> Self {
        self.bus_info = bus_info.into();
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Append a value to a configuration key (keys may hold several values)
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.configuration
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_child(mut self, child: HwNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: HwNode) {
        self.children.push(child);
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(HwNode::node_count).sum::<usize>()
    }
}

impl HardwareNode for HwNode {
    fn class(&self) -> NodeClass {
        self.class
    }

    fn logical_name(&self) -> &str {
        &self.logical_name
    }

    fn serial(&self) -> &str {
        &self.serial
    }

    fn vendor(&self) -> &str {
        &self.vendor
    }

    fn product(&self) -> &str {
        &self.product
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn bus_info(&self) -> &str {
        &self.bus_info
    }

    fn capabilities(&self) -> Vec<&str> {
        self.capabilities.iter().map(String::as_str).collect()
    }

    fn config(&self, key: &str) -> &[String] {
        self.configuration
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
