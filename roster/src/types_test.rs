use super::*;

#[test]
fn user_accepts_numeric_id_and_missing_phone() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "pat@example.com",
        "first_name": "Pat",
        "last_name": "Lee"
    }))
    .expect("user");
    assert_eq!(user.id, "7");
    assert_eq!(user.phone, None);
    assert_eq!(user.display_name(), "Pat Lee");
}

#[test]
fn auth_response_accepts_access_token_alias() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "message": "Login successful",
        "access_token": "tok-1",
        "user": { "id": 1, "email": "a@b.com", "first_name": "A", "last_name": "B" }
    }))
    .expect("auth response");
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.id, "1");
}

#[test]
fn auth_response_accepts_token_field() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "tok-2",
        "user": { "id": "u2", "email": "a@b.com", "first_name": "A", "last_name": "B" }
    }))
    .expect("auth response");
    assert_eq!(resp.token, "tok-2");
}

#[test]
fn family_id_rejects_non_scalar() {
    let err = serde_json::from_value::<Family>(serde_json::json!({
        "id": [1],
        "family_name": "Smith Family"
    }));
    assert!(err.is_err());
}

#[test]
fn new_family_omits_blank_optional_fields() {
    let fields = NewFamily {
        family_name: "Smith Family".to_owned(),
        city: "Austin".to_owned(),
        state: "   ".to_owned(),
        ..NewFamily::default()
    };
    let body = serde_json::to_value(&fields).expect("json");
    assert_eq!(body, serde_json::json!({ "family_name": "Smith Family", "city": "Austin" }));
}

#[test]
fn family_locality_formats_available_parts() {
    let mut family = Family {
        id: "1".to_owned(),
        family_name: "Smith Family".to_owned(),
        address: None,
        city: Some("Austin".to_owned()),
        state: Some("TX".to_owned()),
        zip_code: Some("78701".to_owned()),
        created_at: None,
    };
    assert_eq!(family.locality().as_deref(), Some("Austin, TX 78701"));

    family.city = None;
    assert_eq!(family.locality().as_deref(), Some("TX 78701"));

    family.state = None;
    family.zip_code = None;
    assert_eq!(family.locality(), None);
}

#[test]
fn program_price_accepts_number_string_and_null() {
    let from_number: Program =
        serde_json::from_value(serde_json::json!({ "id": 1, "name": "U10 Soccer", "price": 120.5 })).expect("program");
    assert_eq!(from_number.price, Some(120.5));

    let from_string: Program =
        serde_json::from_value(serde_json::json!({ "id": 2, "name": "Swim", "price": "85.00" })).expect("program");
    assert_eq!(from_string.price, Some(85.0));

    let missing: Program = serde_json::from_value(serde_json::json!({ "id": 3, "name": "Chess" })).expect("program");
    assert_eq!(missing.price, None);
}

#[test]
fn program_registration_uses_camel_case_program_id() {
    let reg = ProgramRegistration {
        name: "Jane".to_owned(),
        child: "Sam".to_owned(),
        email: "jane@example.com".to_owned(),
        program_id: "4".to_owned(),
    };
    let body = serde_json::to_value(&reg).expect("json");
    assert_eq!(body["programId"], "4");
    assert!(body.get("program_id").is_none());
}
