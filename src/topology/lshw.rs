// lshw JSON adapter
//
// Turns the output of `lshw -json` into an `HwNode` tree.
// `logicalname` may be a string or a list; the first entry is the node's
// logical path. Configuration values are strings in practice but numbers and
// lists are accepted too.

use super::{HwNode, NodeClass};
use crate::{DriveError, DriveResult};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn first(&self) -> Option<&str> {
        match self {
            OneOrMany::One(s) => Some(s.as_str()),
            OneOrMany::Many(v) => v.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LshwEntry {
    #[serde(default)]
    class: String,
    #[serde(default)]
    logicalname: Option<OneOrMany>,
    #[serde(default)]
    serial: String,
    #[serde(default)]
    vendor: String,
    #[serde(default)]
    product: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    capacity: Option<u64>,
    #[serde(default)]
    businfo: String,
    #[serde(default)]
    capabilities: BTreeMap<String, Value>,
    #[serde(default)]
    configuration: BTreeMap<String, Value>,
    #[serde(default)]
    children: Vec<LshwEntry>,
}

impl LshwEntry {
    fn into_node(self) -> HwNode {
        let mut node = HwNode::new(NodeClass::from_lshw(&self.class))
            .with_logical_name(
                self.logicalname
                    .as_ref()
                    .and_then(OneOrMany::first)
                    .unwrap_or_default(),
            )
            .with_serial(self.serial)
            .with_vendor(self.vendor)
            .with_product(self.product)
            .with_description(self.description)
            // lshw reports `capacity` for media-less devices
            .with_size(self.size.or(self.capacity).unwrap_or(0))
            .with_bus_info(self.businfo);

        for capability in self.capabilities.into_keys() {
            node = node.with_capability(capability);
        }

        for (key, value) in self.configuration {
            for v in value_strings(&value) {
                node = node.with_config(key.clone(), v);
            }
        }

        for child in self.children {
            node.push_child(child.into_node());
        }

        node
    }
}

fn value_strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Number(n) => vec![n.to_string()],
        Value::Bool(b) => vec![b.to_string()],
        Value::Array(items) => items.iter().flat_map(value_strings).collect(),
        Value::Null | Value::Object(_) => Vec::new(),
    }
}

pub struct LshwScanner;

impl LshwScanner {
    /// Parse `lshw -json` output into a topology tree.
    ///
    /// Some lshw releases wrap the root in a list; several roots are placed
    /// under a synthetic `Other` node.
    pub fn parse(json: &str) -> DriveResult<HwNode> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DriveError::Topology(format!("invalid lshw JSON: {}", e)))?;

        let entries: Vec<LshwEntry> = match value {
            Value::Array(_) => serde_json::from_value::<Vec<LshwEntry>>(value),
            other => serde_json::from_value::<LshwEntry>(other).map(|entry| vec![entry]),
        }
        .map_err(|e| DriveError::Topology(format!("unexpected lshw layout: {}", e)))?;

        let mut nodes: Vec<HwNode> = entries.into_iter().map(LshwEntry::into_node).collect();
        if nodes.len() == 1 {
            if let Some(root) = nodes.pop() {
                return Ok(root);
            }
        }

        let mut root = HwNode::new(NodeClass::Other).with_description("computer");
        for node in nodes {
            root.push_child(node);
        }
        Ok(root)
    }

    pub fn load_file(path: &Path) -> DriveResult<HwNode> {
        let json = fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Run `lshw -json` on this host and parse its output
    pub fn scan() -> DriveResult<HwNode> {
        tracing::debug!("Running: lshw -json -quiet");

        let output = Command::new("lshw")
            .args(["-json", "-quiet"])
            .output()
            .map_err(|e| DriveError::HardwareCommandFailed(format!("lshw failed: {}", e)))?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(DriveError::HardwareCommandFailed(format!(
                "lshw exited with {}: {}",
                output.status,
                error.trim()
            )));
        }

        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }
}
