//! Contacts module - domain models, services, and traits.

mod contacts_model;
mod contacts_service;
mod contacts_traits;


pub use contacts_model::{
    Contact, ContactSubmission, NewContact, CONTACT_TIMESTAMP_FORMAT, REQUIRED_FIELDS,
};
pub use contacts_service::ContactService;
pub use contacts_traits::{ContactRepositoryTrait, ContactServiceTrait};
