//! # IO Module
//!
//! The adapter layer between the booking widget / admin console and the
//! domain logic. It translates HTTP requests into domain commands and domain
//! results into the DTOs defined in the `shared` crate.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: REST endpoints under `/api`
//! - **Error Translation**: Domain errors to HTTP status codes
//! - **Data Mapping**: Shared DTOs to domain commands and back

pub mod rest;

pub use rest::*;
