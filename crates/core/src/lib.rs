//! Contactbox Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for contact-form submissions.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod contacts;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
