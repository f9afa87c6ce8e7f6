use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Contact, ContactCreated, ContactRequest},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

/// Store a new contact-form submission.
///
/// A body that is not valid JSON, or not sent as JSON, is treated like one
/// with every field missing. A body that cannot be read at all (too large,
/// connection dropped) keeps its own status.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, body = ContactCreated),
        (status = 400, body = crate::error::ErrorBody, description = "A required field is missing or empty"),
        (status = 413, body = crate::error::ErrorBody, description = "Body exceeds the size limit"),
        (status = 500, body = crate::error::ErrorBody, description = "Storage failure"),
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<Json<ContactCreated>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(
            rejection @ (JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_)),
        ) => {
            tracing::debug!(%rejection, "Unparsable contact body");
            ContactRequest::default()
        }
        Err(rejection) => {
            tracing::warn!(%rejection, "Contact body rejected");
            return Err(rejection.into());
        }
    };

    let contact = state.contact_service.submit_contact(request.into()).await?;
    Ok(Json(ContactCreated {
        success: true,
        id: contact.id,
    }))
}

/// All stored submissions, newest first.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, body = [Contact]),
        (status = 500, body = crate::error::ErrorBody, description = "Storage failure"),
    )
)]
pub async fn list_contacts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.contact_service.list_contacts()?;
    Ok(Json(contacts.into_iter().map(Contact::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
}
