use crate::{CoreError, VerifiedIdentity};

use googletest::prelude::*;

#[test]
fn given_padded_fields_when_created_then_trimmed() {
    let identity =
        VerifiedIdentity::new("  ana@example.com ", " Ana ", " https://img/ana.png ").unwrap();

    assert_that!(identity.email, eq("ana@example.com"));
    assert_that!(identity.display_name, eq("Ana"));
    assert_that!(identity.avatar_url, eq("https://img/ana.png"));
}

#[test]
fn given_empty_email_when_created_then_validation_error() {
    let result = VerifiedIdentity::new("   ", "Ana", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_email_without_at_sign_when_created_then_validation_error() {
    let result = VerifiedIdentity::new("not-an-email", "Ana", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
