use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::booking_repository::LocalBookingRepository;
use crate::storage::traits::Connection;

/// Slot holding the JSON array of every locally known booking
pub const BOOKINGS_SLOT: &str = "happyvilleBookings";
/// Slot holding the remembered admin identifier (convenience only)
pub const REMEMBERED_ADMIN_SLOT: &str = "adminRememberedEmail";
/// Slot holding the advisory failed sign-in counter and lockout expiry
pub const LOGIN_THROTTLE_SLOT: &str = "adminLoginThrottle";

/// LocalConnection manages a directory of string-keyed slots.
///
/// Each slot is one `<key>.json` file. Writes go to a temporary file first
/// and are then renamed over the original, so a reader never observes a
/// half-written slot.
#[derive(Clone, Debug)]
pub struct LocalConnection {
    base_directory: PathBuf,
}

impl LocalConnection {
    /// Create a new local connection rooted at `base_directory`
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created local data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path backing a slot
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the raw contents of a slot; `None` if the slot was never written
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the contents of a slot atomically
    pub fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let slot_path = self.slot_path(key);
        let temp_path = slot_path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &slot_path)?;

        debug!("Wrote {} bytes to slot '{}'", value.len(), key);
        Ok(())
    }

    /// Delete a slot; deleting a missing slot is not an error
    pub fn remove_slot(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Connection for LocalConnection {
    type BookingRepository = LocalBookingRepository;

    fn create_booking_repository(&self) -> Self::BookingRepository {
        LocalBookingRepository::new(self.clone())
    }
}
