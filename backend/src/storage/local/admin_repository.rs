//! # Admin Repository
//!
//! Persists the two small pieces of admin console state that survive a
//! restart: the remembered sign-in identifier and the failed sign-in counter.
//!
//! Neither value is a security control. The throttle is advisory (anyone with
//! access to the data directory can reset it) and the remembered identifier is
//! a convenience for pre-filling the sign-in form.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::connection::{LocalConnection, LOGIN_THROTTLE_SLOT, REMEMBERED_ADMIN_SLOT};

/// Failed sign-in counter with an optional lockout expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginThrottle {
    pub attempts: u32,
    pub lockout_until: Option<DateTime<Utc>>,
}

impl LoginThrottle {
    /// True while a lockout is set and has not yet expired
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        matches!(self.lockout_until, Some(until) if until > now)
    }
}

#[derive(Clone)]
pub struct AdminRepository {
    connection: LocalConnection,
}

impl AdminRepository {
    pub fn new(connection: LocalConnection) -> Self {
        Self { connection }
    }

    /// Load the throttle state; missing or unreadable state reads as no failures
    pub fn get_throttle(&self) -> LoginThrottle {
        match self.connection.read_slot(LOGIN_THROTTLE_SLOT) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Login throttle state is corrupt, resetting: {}", e);
                LoginThrottle::default()
            }),
            Ok(None) => LoginThrottle::default(),
            Err(e) => {
                warn!("Failed to read login throttle state: {}", e);
                LoginThrottle::default()
            }
        }
    }

    pub fn save_throttle(&self, throttle: &LoginThrottle) -> Result<()> {
        let payload = serde_json::to_string(throttle)?;
        self.connection.write_slot(LOGIN_THROTTLE_SLOT, &payload)?;
        debug!("Saved login throttle: {} failed attempts", throttle.attempts);
        Ok(())
    }

    pub fn clear_throttle(&self) -> Result<()> {
        self.connection.remove_slot(LOGIN_THROTTLE_SLOT)
    }

    pub fn get_remembered_email(&self) -> Option<String> {
        match self.connection.read_slot(REMEMBERED_ADMIN_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<String>(&raw) {
                Ok(email) if !email.trim().is_empty() => Some(email),
                Ok(_) => None,
                Err(e) => {
                    warn!("Remembered admin identifier is corrupt, ignoring: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read remembered admin identifier: {}", e);
                None
            }
        }
    }

    pub fn set_remembered_email(&self, email: &str) -> Result<()> {
        let payload = serde_json::to_string(email)?;
        self.connection.write_slot(REMEMBERED_ADMIN_SLOT, &payload)
    }

    pub fn clear_remembered_email(&self) -> Result<()> {
        self.connection.remove_slot(REMEMBERED_ADMIN_SLOT)
    }
}
