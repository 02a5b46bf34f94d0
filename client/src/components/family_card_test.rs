use super::*;

#[test]
fn registered_on_keeps_date_part() {
    assert_eq!(registered_on(Some("2026-10-16T09:30:00")).as_deref(), Some("2026-10-16"));
    assert_eq!(registered_on(Some("2026-10-16 09:30:00")).as_deref(), Some("2026-10-16"));
}

#[test]
fn registered_on_handles_missing_or_blank() {
    assert_eq!(registered_on(None), None);
    assert_eq!(registered_on(Some("  ")), None);
}
