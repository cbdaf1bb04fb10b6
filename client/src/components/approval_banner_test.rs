use super::*;

#[test]
fn pending_accounts_get_waiting_message() {
    assert!(notice_text(ApprovalNotice::Pending).is_some_and(|t| t.contains("pending approval")));
}

#[test]
fn approved_accounts_get_one_time_message() {
    assert!(notice_text(ApprovalNotice::JustApproved).is_some_and(|t| t.contains("approved")));
}

#[test]
fn no_notice_renders_nothing() {
    assert_eq!(notice_text(ApprovalNotice::None), None);
}
