//! Database models for contact submissions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use contactbox_core::contacts::{Contact, NewContact};

/// Database model for a stored contact
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactDB {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a contact. `id` and `created_at` come from the table.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::contacts)]
pub struct NewContactDB {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<ContactDB> for Contact {
    fn from(db: ContactDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            message: db.message,
            created_at: db.created_at,
        }
    }
}

impl From<NewContact> for NewContactDB {
    fn from(domain: NewContact) -> Self {
        Self {
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            message: domain.message,
        }
    }
}
