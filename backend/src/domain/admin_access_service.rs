//! Admin console sign-in.
//!
//! Credentials are checked by an external verifier; this service only keeps
//! the bookkeeping around it: an advisory lockout after repeated failures, the
//! remembered sign-in identifier, and the in-memory session.

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::domain::commands::admin::{AdminSession, SignInCommand};
use crate::storage::local::{AdminRepository, LoginThrottle};
use crate::storage::CredentialVerifier;

pub const MAX_FAILED_ATTEMPTS: u32 = 3;
pub const LOCKOUT_MINUTES: i64 = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminAccessError {
    #[error("Please enter your email and password")]
    MissingCredentials,
    #[error("Invalid credentials. {remaining_attempts} attempts remaining.")]
    InvalidCredentials { remaining_attempts: u32 },
    #[error("Too many failed attempts. Try again after {until}")]
    LockedOut { until: DateTime<Utc> },
}

#[derive(Clone)]
pub struct AdminAccessService {
    repository: AdminRepository,
    verifier: Arc<dyn CredentialVerifier>,
    session: Arc<Mutex<Option<AdminSession>>>,
}

impl AdminAccessService {
    pub fn new(repository: AdminRepository, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            repository,
            verifier,
            session: Arc::new(Mutex::new(None)),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, Option<AdminSession>> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current throttle state, with an expired lockout cleared
    pub fn throttle_status(&self, now: DateTime<Utc>) -> LoginThrottle {
        let throttle = self.repository.get_throttle();
        match throttle.lockout_until {
            Some(until) if until <= now => LoginThrottle::default(),
            _ => throttle,
        }
    }

    fn persist_throttle(&self, throttle: &LoginThrottle) {
        let result = if *throttle == LoginThrottle::default() {
            self.repository.clear_throttle()
        } else {
            self.repository.save_throttle(throttle)
        };
        if let Err(e) = result {
            warn!("Failed to persist login throttle: {}", e);
        }
    }

    pub async fn sign_in(
        &self,
        command: SignInCommand,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AdminAccessError> {
        let mut throttle = self.throttle_status(now);
        if let Some(until) = throttle.lockout_until {
            warn!("Admin sign-in refused while locked out");
            return Err(AdminAccessError::LockedOut { until });
        }

        let email = command.email.trim().to_string();
        if email.is_empty() || command.password.is_empty() {
            return Err(AdminAccessError::MissingCredentials);
        }

        if self.verifier.verify(&email, &command.password).await {
            self.persist_throttle(&LoginThrottle::default());

            if command.remember_me {
                if let Err(e) = self.repository.set_remembered_email(&email) {
                    warn!("Failed to remember admin identifier: {}", e);
                }
            }

            let session = AdminSession {
                email,
                signed_in_at: now,
            };
            *self.lock_session() = Some(session.clone());
            info!("Admin {} signed in", session.email);
            return Ok(session);
        }

        throttle.attempts += 1;
        if throttle.attempts >= MAX_FAILED_ATTEMPTS {
            let until = now + Duration::minutes(LOCKOUT_MINUTES);
            throttle.lockout_until = Some(until);
            self.persist_throttle(&throttle);
            warn!("Admin sign-in locked for {} minutes after {} failures", LOCKOUT_MINUTES, throttle.attempts);
            return Err(AdminAccessError::LockedOut { until });
        }

        self.persist_throttle(&throttle);
        warn!("Admin sign-in failed ({} of {})", throttle.attempts, MAX_FAILED_ATTEMPTS);
        Err(AdminAccessError::InvalidCredentials {
            remaining_attempts: MAX_FAILED_ATTEMPTS - throttle.attempts,
        })
    }

    pub fn sign_out(&self) {
        if let Some(session) = self.lock_session().take() {
            info!("Admin {} signed out", session.email);
        }
    }

    pub fn current_session(&self) -> Option<AdminSession> {
        self.lock_session().clone()
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.repository.get_remembered_email()
    }

    pub fn forget_remembered_email(&self) -> anyhow::Result<()> {
        self.repository.clear_remembered_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::local::test_utils::TestEnvironment;
    use async_trait::async_trait;

    struct FixedVerifier;

    #[async_trait]
    impl CredentialVerifier for FixedVerifier {
        async fn verify(&self, email: &str, password: &str) -> bool {
            email == "owner@happyville.co.za" && password == "correct horse"
        }
    }

    fn setup() -> (TestEnvironment, AdminAccessService) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let service = AdminAccessService::new(
            AdminRepository::new(env.connection.clone()),
            Arc::new(FixedVerifier),
        );
        (env, service)
    }

    fn attempt(password: &str, remember_me: bool) -> SignInCommand {
        SignInCommand {
            email: "owner@happyville.co.za".to_string(),
            password: password.to_string(),
            remember_me,
        }
    }

    #[tokio::test]
    async fn test_successful_sign_in_starts_session() {
        let (_env, service) = setup();
        let now = Utc::now();

        let session = service.sign_in(attempt("correct horse", false), now).await.unwrap();
        assert_eq!(session.email, "owner@happyville.co.za");
        assert_eq!(service.current_session(), Some(session));
        assert_eq!(service.remembered_email(), None);

        service.sign_out();
        assert_eq!(service.current_session(), None);
    }

    #[tokio::test]
    async fn test_remember_me_persists_identifier() {
        let (env, service) = setup();
        service.sign_in(attempt("correct horse", true), Utc::now()).await.unwrap();
        assert_eq!(service.remembered_email().as_deref(), Some("owner@happyville.co.za"));

        // Survives a restart
        let restarted = AdminAccessService::new(
            AdminRepository::new(env.connection.clone()),
            Arc::new(FixedVerifier),
        );
        assert_eq!(restarted.remembered_email().as_deref(), Some("owner@happyville.co.za"));
        assert_eq!(restarted.current_session(), None);
    }

    #[tokio::test]
    async fn test_three_failures_lock_out_for_five_minutes() {
        let (_env, service) = setup();
        let now = Utc::now();

        assert_eq!(
            service.sign_in(attempt("nope", false), now).await,
            Err(AdminAccessError::InvalidCredentials { remaining_attempts: 2 })
        );
        assert_eq!(
            service.sign_in(attempt("nope", false), now).await,
            Err(AdminAccessError::InvalidCredentials { remaining_attempts: 1 })
        );

        let until = now + Duration::minutes(5);
        assert_eq!(
            service.sign_in(attempt("nope", false), now).await,
            Err(AdminAccessError::LockedOut { until })
        );

        // Even the right password is refused while locked
        let later = now + Duration::minutes(4);
        assert_eq!(
            service.sign_in(attempt("correct horse", false), later).await,
            Err(AdminAccessError::LockedOut { until })
        );

        // After expiry the counter starts over
        let after = now + Duration::minutes(6);
        assert_eq!(service.throttle_status(after), LoginThrottle::default());
        assert!(service.sign_in(attempt("correct horse", false), after).await.is_ok());
    }

    #[tokio::test]
    async fn test_success_resets_failure_counter() {
        let (_env, service) = setup();
        let now = Utc::now();

        service.sign_in(attempt("nope", false), now).await.unwrap_err();
        service.sign_in(attempt("nope", false), now).await.unwrap_err();
        service.sign_in(attempt("correct horse", false), now).await.unwrap();

        assert_eq!(service.throttle_status(now).attempts, 0);
        assert_eq!(
            service.sign_in(attempt("nope", false), now).await,
            Err(AdminAccessError::InvalidCredentials { remaining_attempts: 2 })
        );
    }

    #[tokio::test]
    async fn test_blank_credentials_do_not_count() {
        let (_env, service) = setup();
        let now = Utc::now();

        let blank = SignInCommand { email: " ".to_string(), password: "x".to_string(), remember_me: false };
        assert_eq!(service.sign_in(blank, now).await, Err(AdminAccessError::MissingCredentials));
        assert_eq!(service.throttle_status(now).attempts, 0);
    }
}
