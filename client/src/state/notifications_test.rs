use super::*;
use marketplace_session::notifications::NotificationKind;

fn note(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        kind: NotificationKind::Car,
        message: format!("car {id} updated"),
        related_id: Some(id.to_owned()),
        is_read,
        created_at: None,
    }
}

#[test]
fn poll_result_replaces_items() {
    let mut state = NotificationsState { items: vec![note("1", false)], open: true };
    state.apply_poll(Ok(vec![note("2", false), note("3", true)]));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.unread(), 1);
    assert!(state.open);
}

#[test]
fn failed_poll_keeps_previous_items() {
    let mut state = NotificationsState { items: vec![note("1", false)], open: false };
    state.apply_poll(Err("Request failed with status code 500".to_owned()));
    assert_eq!(state.items, vec![note("1", false)]);
}

#[test]
fn mark_read_updates_unread_count() {
    let mut state = NotificationsState { items: vec![note("1", false), note("2", false)], open: false };
    state.mark_read("2");
    assert_eq!(state.unread(), 1);
    state.mark_all_read();
    assert_eq!(state.unread(), 0);
}

#[test]
fn clear_resets_everything() {
    let mut state = NotificationsState { items: vec![note("1", false)], open: true };
    state.clear();
    assert_eq!(state, NotificationsState::default());
}
