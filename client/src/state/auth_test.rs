use super::*;

fn user(first_name: &str) -> User {
    User {
        id: "1".to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Smith".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: None,
    }
}

// =============================================================
// greeting
// =============================================================

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(Some(&user("Jane"))), "Welcome, Jane");
}

#[test]
fn greeting_falls_back_without_user_or_name() {
    assert_eq!(greeting(None), "Welcome");
    assert_eq!(greeting(Some(&user("  "))), "Welcome");
}
