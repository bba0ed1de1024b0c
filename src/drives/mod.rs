// Disk inventory module
//
// - types.rs: disk taxonomy (DiskType, Disk variants, attributes)
// - detection.rs: topology walk and classification
// - freeze.rs: ATA freeze precondition ahead of erasure

pub mod detection;
pub mod freeze;
pub mod types;



pub use detection::{ClassifierConfig, DiskClassifier, SataSectorPolicy};
pub use freeze::FreezeMitigation;
pub use types::{AtaDisk, Disk, DiskAttributes, DiskState, DiskType, DEFAULT_SECTOR_SIZE};
