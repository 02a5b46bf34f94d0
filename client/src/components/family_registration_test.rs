use super::*;

const ALL_FIELDS: [FamilyField; 5] = [
    FamilyField::FamilyName,
    FamilyField::Address,
    FamilyField::City,
    FamilyField::State,
    FamilyField::ZipCode,
];

#[test]
fn field_ids_match_api_field_names() {
    let ids: Vec<_> = ALL_FIELDS.into_iter().map(field_id).collect();
    assert_eq!(ids, vec!["family_name", "address", "city", "state", "zip_code"]);
}

#[test]
fn only_family_name_label_is_marked_required() {
    let required: Vec<_> = ALL_FIELDS
        .into_iter()
        .filter(|f| field_label(*f).ends_with('*'))
        .collect();
    assert_eq!(required, vec![FamilyField::FamilyName]);
}

// =============================================================
// complete
// =============================================================

fn run(outcome: &roster::form::SubmitOutcome) -> Vec<String> {
    let log = std::cell::RefCell::new(Vec::new());
    complete(
        outcome,
        || log.borrow_mut().push("refresh".to_owned()),
        |e| log.borrow_mut().push(format!("sign out: {e}")),
    );
    log.into_inner()
}

#[test]
fn registered_refreshes_even_without_a_live_form() {
    use roster::form::SubmitOutcome;

    // The outcome comes straight from the response; no form is consulted.
    let outcome = SubmitOutcome::from_result(Ok(()));
    assert_eq!(run(&outcome), vec!["refresh"]);
}

#[test]
fn rejected_token_signs_out() {
    use roster::form::SubmitOutcome;

    let outcome = SubmitOutcome::from_result(Err(roster::ApiError::Auth("Token has expired".to_owned())));
    assert_eq!(run(&outcome), vec!["sign out: Token has expired"]);
}

#[test]
fn other_failures_stay_in_the_form() {
    let outcome = roster::form::SubmitOutcome::Failed("zip_code is too long".to_owned());
    assert!(run(&outcome).is_empty());
}

// =============================================================
// can_close
// =============================================================

#[test]
fn modal_cannot_close_while_submitting() {
    let mut form = FamilyForm::default();
    form.set(FamilyField::FamilyName, "Smith Family".to_owned());
    assert!(can_close(&form));

    form.begin_submit().expect("submit");
    assert!(!can_close(&form));

    form.settle(&roster::form::SubmitOutcome::Failed("boom".to_owned()));
    assert!(can_close(&form));
}
