//! Contacts domain models.

use chrono::NaiveDateTime;

use crate::errors::ValidationError;

/// Wire format of `created_at`, matching SQLite's `CURRENT_TIMESTAMP`.
pub const CONTACT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields a submission must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "phone", "message"];

/// Domain model representing a stored contact submission
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl Contact {
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CONTACT_TIMESTAMP_FORMAT).to_string()
    }
}

/// Raw submission as received from a caller. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Checks that every required field is present and non-empty.
    ///
    /// Whitespace-only values are accepted; only absence and the empty
    /// string are rejected.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        let [name, email, phone, message] =
            [self.name, self.email, self.phone, self.message].map(Option::unwrap_or_default);

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .zip([&name, &email, &phone, &message])
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(NewContact {
            name,
            email,
            phone,
            message,
        })
    }
}

/// Validated input for storing a new contact. Built by [`ContactSubmission::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}
