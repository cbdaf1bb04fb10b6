use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ann@example.com ", "pw"),
        Ok(("ann@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ann@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ann", "pw"), Err("Enter a valid email address."));
}

#[test]
fn dismissed_popup_shows_nothing() {
    assert_eq!(login_failure_message(&ProviderError::PopupClosed), None);
}

#[test]
fn bad_credentials_are_reported() {
    assert_eq!(
        login_failure_message(&ProviderError::InvalidCredentials).as_deref(),
        Some("Failed to log in: invalid email or password")
    );
}

#[test]
fn reset_failure_includes_provider_message() {
    let err = ProviderError::Rejected { code: "auth/user-disabled".to_owned(), message: "disabled".to_owned() };
    assert_eq!(reset_failure_message(&err), "Failed to reset password: disabled (auth/user-disabled)");
}
