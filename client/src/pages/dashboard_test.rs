use super::*;
use marketplace_session::{ApplicationUser, ProviderIdentity, Role};

fn user(name: &str, role: Role, approved: bool) -> SessionUser {
    let identity = ProviderIdentity {
        uid: "g-3".to_owned(),
        email: None,
        display_name: Some("Provider Name".to_owned()),
        photo_url: None,
        email_verified: true,
    };
    SessionUser::merge(
        &identity,
        ApplicationUser {
            id: "3".to_owned(),
            name: name.to_owned(),
            email: "c@example.com".to_owned(),
            role,
            approved,
            picture: None,
            profile: serde_json::Map::new(),
        },
    )
}

#[test]
fn greeting_uses_first_name_of_backend_name() {
    assert_eq!(greeting(&user("Carla Diaz", Role::User, true)), "Welcome back, Carla!");
}

#[test]
fn greeting_falls_back_to_provider_name() {
    assert_eq!(greeting(&user("", Role::User, true)), "Welcome back, Provider!");
}

#[test]
fn role_label_reflects_approval() {
    assert_eq!(role_label(&user("A", Role::Admin, false)), "Administrator");
    assert_eq!(role_label(&user("A", Role::User, true)), "Seller");
    assert_eq!(role_label(&user("A", Role::User, false)), "Pending seller");
}
