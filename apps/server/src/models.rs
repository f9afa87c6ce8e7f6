use contactbox_core::contacts as core_contacts;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/contact`. Fields are optional so that absence is
/// reported as a validation error instead of a decode failure.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl From<ContactRequest> for core_contacts::ContactSubmission {
    fn from(r: ContactRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone: r.phone,
            message: r.message,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ContactCreated {
    pub success: bool,
    pub id: i64,
}

/// A stored submission as returned by `GET /api/contacts`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    #[schema(example = "2024-01-01 12:00:00")]
    pub created_at: String,
}

impl From<core_contacts::Contact> for Contact {
    fn from(c: core_contacts::Contact) -> Self {
        let created_at = c.created_at_display();
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            message: c.message,
            created_at,
        }
    }
}
