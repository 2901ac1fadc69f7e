//! # Remote Storage Module
//!
//! HTTP clients for the two external collaborators: the spreadsheet-backed
//! record service that mirrors bookings, and the credential service that
//! verifies admin sign-ins.
//!
//! Both are best-effort. They never return errors to the domain layer; every
//! failure is logged and reported as "unavailable", an empty list or a denial.

pub mod client;
pub mod credential_client;

pub use client::{RecordServiceClient, RemoteError};
pub use credential_client::HttpCredentialVerifier;
