use super::*;
use marketplace_session::notifications::NotificationKind;

#[test]
fn badge_hidden_when_everything_is_read() {
    assert_eq!(badge_label(0), None);
}

#[test]
fn badge_shows_exact_count_up_to_cap() {
    assert_eq!(badge_label(3).as_deref(), Some("3"));
    assert_eq!(badge_label(9).as_deref(), Some("9"));
}

#[test]
fn badge_caps_large_counts() {
    assert_eq!(badge_label(27).as_deref(), Some("9+"));
}

#[test]
fn unread_items_get_highlight_class() {
    let mut n = Notification {
        id: "1".to_owned(),
        kind: NotificationKind::Lead,
        message: "New lead".to_owned(),
        related_id: None,
        is_read: false,
        created_at: None,
    };
    assert_eq!(item_class(&n), "notification-item notification-item--unread");
    n.is_read = true;
    assert_eq!(item_class(&n), "notification-item");
}

fn note(kind: NotificationKind, related: Option<&str>) -> Notification {
    Notification {
        id: "1".to_owned(),
        kind,
        message: "m".to_owned(),
        related_id: related.map(str::to_owned),
        is_read: false,
        created_at: None,
    }
}

#[test]
fn user_notification_links_admins_to_users_page() {
    let n = note(NotificationKind::User, Some("5"));
    assert_eq!(item_href(&n, true).as_deref(), Some("/dashboard/users?highlight=5"));
    assert_eq!(item_href(&n, false), None);
}

#[test]
fn destinations_without_a_page_are_not_linked() {
    assert_eq!(item_href(&note(NotificationKind::Car, Some("3")), false), None);
    assert_eq!(item_href(&note(NotificationKind::Car, Some("3")), true), None);
    assert_eq!(item_href(&note(NotificationKind::Lead, Some("8")), true), None);
}

#[test]
fn notification_without_related_record_is_not_linked() {
    assert_eq!(item_href(&note(NotificationKind::User, None), true), None);
}
