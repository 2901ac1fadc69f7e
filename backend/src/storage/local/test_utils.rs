//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use anyhow::Result;
use chrono::Utc;
use shared::{Booking, BookingStatus};
use tempfile::TempDir;

use super::connection::LocalConnection;

/// Test environment that provides a temporary directory and connection
/// that will be automatically cleaned up when the environment is dropped,
/// even if tests panic or fail.
pub struct TestEnvironment {
    pub connection: LocalConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = LocalConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// A complete, valid-looking booking for storage tests
pub fn sample_booking(id: &str) -> Booking {
    let now = Utc::now();
    Booking {
        id: id.to_string(),
        legacy_id: None,
        name: "Thandi Mokoena".to_string(),
        phone: "0821234567".to_string(),
        email: "thandi@example.com".to_string(),
        activity: "general-1".to_string(),
        activity_name: "General Admission 1hr".to_string(),
        kids: 2,
        adults: 1,
        date: "2026-10-24".to_string(),
        time: "10:00".to_string(),
        total: 330,
        notes: String::new(),
        grip_socks: true,
        waiver: true,
        status: BookingStatus::Pending,
        created_at: Some(now),
        updated_at: Some(now),
        is_local: true,
    }
}
