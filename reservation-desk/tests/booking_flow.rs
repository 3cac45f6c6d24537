use chrono::{Duration, Local};
use reservation_desk::form::{BOOKING_CONFIRMATION, DisplayState, FormController, SubmitOutcome};
use shared::ReservationField;

fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_valid_booking_is_accepted() {
    // 1. Fill the form: tomorrow at 13:00 for 4, nothing optional
    let mut form = FormController::new();
    form.on_field_change(ReservationField::Date, &tomorrow());
    form.on_field_change(ReservationField::Time, "13:00");
    form.on_field_change(ReservationField::Guests, "4");

    // 2. Submit
    let outcome = form.on_submit();

    // 3. Acknowledged, no errors, draft kept
    match outcome {
        SubmitOutcome::Accepted(ack) => {
            assert_eq!(ack.message, BOOKING_CONFIRMATION);
            assert_eq!(ack.draft.occasion, "");
            assert_eq!(ack.draft.special_requests, "");
        }
        SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors}"),
    }
    assert!(form.errors().is_empty());
    assert_eq!(form.draft().guests, 4);
    assert_eq!(form.display_state(), DisplayState::SubmittedSuccess);
}

#[test]
fn test_missing_date_and_time() {
    let mut form = FormController::new();
    let outcome = form.on_submit();

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("empty form must not be accepted");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(form.error_for(ReservationField::Date), Some("Date is required"));
    assert_eq!(form.error_for(ReservationField::Time), Some("Time is required"));
    assert_eq!(form.error_for(ReservationField::Guests), None);
}

#[test]
fn test_guest_edit_before_submit_wins() {
    let mut form = FormController::new();
    form.on_field_change(ReservationField::Date, &tomorrow());
    form.on_field_change(ReservationField::Time, "19:00");
    form.on_field_change(ReservationField::Guests, "0");
    form.on_field_change(ReservationField::Guests, "11");

    form.on_submit();

    assert_eq!(form.errors().len(), 1);
    assert_eq!(
        form.error_for(ReservationField::Guests),
        Some("Maximum 10 guests allowed")
    );
}

#[test]
fn test_fix_and_resubmit() {
    let mut form = FormController::new();
    form.on_field_change(ReservationField::Guests, "0");
    form.on_submit();
    assert_eq!(form.errors().len(), 3);

    // edits clear errors one field at a time
    form.on_field_change(ReservationField::Date, &tomorrow());
    assert_eq!(form.errors().len(), 2);
    form.on_field_change(ReservationField::Time, "12:00");
    form.on_field_change(ReservationField::Guests, "");
    assert!(form.errors().is_empty());
    assert_eq!(form.display_state(), DisplayState::Editing);

    // blank guests coerced to 0 still fails on the next submit
    form.on_submit();
    assert_eq!(
        form.error_for(ReservationField::Guests),
        Some("At least 1 guest required")
    );

    form.on_field_change(ReservationField::Guests, "3");
    assert!(form.on_submit().is_accepted());
}

#[test]
fn test_special_requests_limit() {
    let mut form = FormController::new();
    form.on_field_change(ReservationField::Date, &tomorrow());
    form.on_field_change(ReservationField::Time, "14:00");

    form.on_field_change(ReservationField::SpecialRequests, &"v".repeat(500));
    assert!(form.on_submit().is_accepted());

    form.on_field_change(ReservationField::SpecialRequests, &"v".repeat(501));
    assert!(!form.on_submit().is_accepted());
    assert_eq!(
        form.error_for(ReservationField::SpecialRequests),
        Some("Special requests limited to 500 characters")
    );
}

#[test]
fn test_repeat_submit_of_valid_draft() {
    let mut form = FormController::new();
    form.on_field_change(ReservationField::Date, &tomorrow());
    form.on_field_change(ReservationField::Time, "17:00");

    for _ in 0..2 {
        assert!(form.on_submit().is_accepted());
        assert!(form.errors().is_empty());
    }
}

#[test]
fn test_named_field_changes() {
    let mut form = FormController::new();
    for (name, value) in [
        ("date", "2030-01-01"),
        ("time", "15:00"),
        ("guests", "8"),
        ("occasion", "business"),
        ("specialRequests", "Projector, if possible"),
    ] {
        form.on_field_change_named(name, value).expect("known field");
    }

    let draft = form.draft();
    assert_eq!(draft.guests, 8);
    assert_eq!(draft.special_requests, "Projector, if possible");
    assert!(form.on_submit().is_accepted());

    assert!(form.on_field_change_named("notes", "x").is_err());
}
