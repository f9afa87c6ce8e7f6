use contactbox_core::contacts::{Contact, ContactRepositoryTrait, NewContact};
use contactbox_core::Result;

use super::model::{ContactDB, NewContactDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::contacts;
use crate::schema::contacts::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ContactRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContactRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ContactRepository { pool, writer }
    }

    fn list_contacts_impl(&self) -> Result<Vec<Contact>> {
        let mut conn = get_connection(&self.pool)?;
        let contacts_db = contacts
            .select(ContactDB::as_select())
            .order((created_at.desc(), id.desc()))
            .load::<ContactDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(contacts_db.into_iter().map(Contact::from).collect())
    }
}

#[async_trait]
impl ContactRepositoryTrait for ContactRepository {
    async fn insert_contact(&self, new_contact: NewContact) -> Result<Contact> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contact> {
                let new_contact_db: NewContactDB = new_contact.into();

                let result_db = diesel::insert_into(contacts::table)
                    .values(&new_contact_db)
                    .returning(ContactDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Contact::from(result_db))
            })
            .await
    }

    fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.list_contacts_impl()
    }
}
