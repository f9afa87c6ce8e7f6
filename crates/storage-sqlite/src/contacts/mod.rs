//! SQLite storage implementation for contact submissions.

mod model;
mod repository;

pub use model::{ContactDB, NewContactDB};
pub use repository::ContactRepository;
