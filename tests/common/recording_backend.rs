//! Backend that records each command in order

use disk_erase::algorithms::{EraseBackend, GutmannPass, SecureEraseMethod};
use disk_erase::{DriveError, DriveResult};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Unfreeze(String),
    SecureErase(String, SecureEraseMethod),
    Overwrite {
        path: String,
        sector_size: u64,
        passes: usize,
    },
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    refuse_unfreeze: bool,
    fail_on: Option<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every unfreeze attempt fails, as on a BIOS that re-locks the drive
    pub fn refusing_unfreeze() -> Self {
        Self {
            refuse_unfreeze: true,
            ..Self::default()
        }
    }

    /// Every command aimed at `path` fails
    pub fn failing_on(path: &str) -> Self {
        Self {
            fail_on: Some(path.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, path: &str, call: Call) -> DriveResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on.as_deref() == Some(path) {
            return Err(DriveError::HardwareCommandFailed(format!("{}: I/O error", path)));
        }
        Ok(())
    }
}

impl EraseBackend for RecordingBackend {
    fn unfreeze(&self, device_path: &str) -> DriveResult<()> {
        if self.refuse_unfreeze {
            self.calls.lock().unwrap().push(Call::Unfreeze(device_path.to_string()));
            return Err(DriveError::DriveFrozen(device_path.to_string()));
        }
        self.record(device_path, Call::Unfreeze(device_path.to_string()))
    }

    fn secure_erase(&self, device_path: &str, method: SecureEraseMethod) -> DriveResult<()> {
        self.record(device_path, Call::SecureErase(device_path.to_string(), method))
    }

    fn overwrite(&self, device_path: &str, sector_size: u64, passes: &[GutmannPass]) -> DriveResult<()> {
        self.record(
            device_path,
            Call::Overwrite {
                path: device_path.to_string(),
                sector_size,
                passes: passes.len(),
            },
        )
    }
}
