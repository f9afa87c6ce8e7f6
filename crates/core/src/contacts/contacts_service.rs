use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::contacts_model::{Contact, ContactSubmission};
use super::contacts_traits::{ContactRepositoryTrait, ContactServiceTrait};
use crate::errors::Result;

pub struct ContactService {
    repository: Arc<dyn ContactRepositoryTrait>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepositoryTrait>) -> Self {
        ContactService { repository }
    }
}

#[async_trait]
impl ContactServiceTrait for ContactService {
    async fn submit_contact(&self, submission: ContactSubmission) -> Result<Contact> {
        let new_contact = submission.validate().map_err(|e| {
            warn!("Rejected contact submission: {:?}", e);
            e
        })?;

        let contact = self.repository.insert_contact(new_contact).await?;
        info!("Stored contact submission {}", contact.id);
        Ok(contact)
    }

    fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.repository.list_contacts()?;
        debug!("Loaded {} contact submissions", contacts.len());
        Ok(contacts)
    }
}
