use crate::contacts::contacts_model::{Contact, ContactSubmission, NewContact};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for contact repository operations
#[async_trait]
pub trait ContactRepositoryTrait: Send + Sync {
    /// Stores a validated contact. The store assigns `id` and `created_at`.
    async fn insert_contact(&self, new_contact: NewContact) -> Result<Contact>;
    /// All contacts, newest first; equal timestamps ordered by descending id.
    fn list_contacts(&self) -> Result<Vec<Contact>>;
}

/// Trait for contact service operations
#[async_trait]
pub trait ContactServiceTrait: Send + Sync {
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<Contact>;
    fn list_contacts(&self) -> Result<Vec<Contact>>;
}
