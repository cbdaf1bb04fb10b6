use super::*;
use marketplace_session::Role;

fn member(id: &str, name: &str, email: &str, approved: bool) -> ApplicationUser {
    ApplicationUser {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role: Role::User,
        approved,
        picture: None,
        profile: serde_json::Map::new(),
    }
}

#[test]
fn user_label_combines_name_and_email() {
    assert_eq!(user_label(&member("1", "Ann", "a@x.test", false)), "Ann <a@x.test>");
}

#[test]
fn user_label_falls_back_to_what_is_known() {
    assert_eq!(user_label(&member("1", "", "a@x.test", false)), "a@x.test");
    assert_eq!(user_label(&member("1", "Ann", "", false)), "Ann");
    assert_eq!(user_label(&member("42", " ", "", false)), "User #42");
}

#[test]
fn summary_counts_both_queues() {
    let queues = partition_for_review(vec![
        member("1", "A", "", false),
        member("2", "B", "", true),
        member("3", "C", "", false),
    ]);
    assert_eq!(summary(&queues), "2 pending · 1 approved");
}
