// src/tests/router_tests/reminders_tests.rs
use chrono::{TimeZone, Utc};

use crate::tests::utils::*;

#[test]
fn lists_seeded_reminders() {
    let app = renter_app();
    let body = body_json(send(&app, get("/reminders")));
    assert_eq!(body["reminders"].as_array().unwrap().len(), 2);
    assert_eq!(body["unread_count"], 1);
}

#[test]
fn check_creates_one_reminder_until_read() {
    let app = renter_app();

    let body = body_json(send(&app, post("/reminders/check", "")));
    let created = body["created"].as_array().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["title"], "Rent Due Tomorrow!");
    assert_eq!(created[0]["category"], "payment");
    assert_eq!(created[0]["tier"], "urgent");
    assert_eq!(created[0]["due_date"], "2025-06-01");
    assert_eq!(body["unread_count"], 2);

    let again = body_json(send(&app, post("/reminders/check", "")));
    assert!(again["created"].as_array().unwrap().is_empty());
    assert_eq!(again["unread_count"], 2);

    let id = created[0]["id"].as_str().unwrap();
    let read = body_json(send(&app, post(&format!("/reminders/{id}/read"), "")));
    assert_eq!(read["unread_count"], 1);

    let list = body_json(send(&app, get("/reminders")));
    assert_eq!(list["reminders"][0]["is_read"], true);
}

#[test]
fn reading_unknown_reminder_is_not_found() {
    let app = renter_app();
    assert_eq!(send(&app, post("/reminders/nope/read", "")).status(), 404);
}

#[test]
fn no_reminder_outside_window() {
    let app = test_app_at(Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap());
    sign_in(&app, "john%40example.com");

    let body = body_json(send(&app, post("/reminders/check", "")));
    assert!(body["created"].as_array().unwrap().is_empty());
}

#[test]
fn toggles_auto_pay() {
    let app = renter_app();

    let body = body_json(send(&app, post("/autopay", "enabled=true")));
    assert_eq!(body["auto_pay_enabled"], true);
    let dash = body_json(send(&app, get("/dashboard")));
    assert_eq!(dash["auto_pay_enabled"], true);

    let body = body_json(send(&app, post("/autopay", "enabled=false")));
    assert_eq!(body["auto_pay_enabled"], false);

    assert_eq!(send(&app, post("/autopay", "enabled=maybe")).status(), 400);
}
