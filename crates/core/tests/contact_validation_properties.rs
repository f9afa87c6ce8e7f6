//! Property-based tests for contact submission validation.
//!
//! Uses the `proptest` crate to check that the presence rules hold for
//! arbitrary field contents.

use contactbox_core::contacts::{ContactSubmission, REQUIRED_FIELDS};
use contactbox_core::errors::ValidationError;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// A field value that always passes the presence check.
fn arb_present() -> impl Strategy<Value = String> {
    ".{1,40}"
}

/// A field value that may be present, empty, or absent.
fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        arb_present().prop_map(Some),
    ]
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().unwrap_or_default().is_empty()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn complete_submissions_keep_their_values(
        name in arb_present(),
        email in arb_present(),
        phone in arb_present(),
        message in arb_present(),
    ) {
        let submission = ContactSubmission {
            name: Some(name.clone()),
            email: Some(email.clone()),
            phone: Some(phone.clone()),
            message: Some(message.clone()),
        };

        let new_contact = submission.validate().unwrap();
        prop_assert_eq!(new_contact.name, name);
        prop_assert_eq!(new_contact.email, email);
        prop_assert_eq!(new_contact.phone, phone);
        prop_assert_eq!(new_contact.message, message);
    }

    #[test]
    fn missing_fields_are_reported_exactly(
        name in arb_field(),
        email in arb_field(),
        phone in arb_field(),
        message in arb_field(),
    ) {
        let fields = [&name, &email, &phone, &message];
        let expected: Vec<String> = REQUIRED_FIELDS
            .iter()
            .zip(fields)
            .filter(|(_, value)| is_missing(value))
            .map(|(field, _)| field.to_string())
            .collect();

        let submission = ContactSubmission {
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            message: message.clone(),
        };

        match submission.validate() {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(ValidationError::MissingFields(reported)) => prop_assert_eq!(reported, expected),
        }
    }
}
