// src/tests/router_tests/dashboard_tests.rs
use crate::tests::utils::*;

#[test]
fn renter_dashboard() {
    let app = renter_app();
    let resp = send(&app, get("/dashboard"));
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["user"]["name"], "John Smith");
    assert_eq!(body["rent_display"], "$1,500");
    assert_eq!(body["due_date"], "2025-06-01");
    assert_eq!(body["due_date_display"], "June 1, 2025");
    assert_eq!(body["days_remaining"], 1);
    assert_eq!(body["due_label"], "Due Tomorrow");
    assert_eq!(body["auto_pay_enabled"], false);
    assert_eq!(body["unread_reminders"], 1);
    assert_eq!(body["unread_messages"], 1);
    assert_eq!(body["recent_payments"].as_array().unwrap().len(), 3);
    assert_eq!(body["recent_payments"][0]["reference"], "PAY-2025-001");
}

#[test]
fn landlord_dashboard() {
    let app = landlord_app();
    let resp = send(&app, get("/dashboard"));
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["user"]["role"], "landlord");
    assert_eq!(body["summary"]["total_units"], 72);
    assert_eq!(body["summary"]["occupancy_percent"], 93);
    assert_eq!(body["summary"]["monthly_revenue"], 6500.0);
    assert_eq!(body["summary"]["pending_maintenance"], 1);
    assert_eq!(body["summary"]["unread_messages"], 1);
    assert_eq!(body["revenue_display"], "$6,500");
    assert_eq!(body["tenant_counts"]["total"], 5);
    assert_eq!(body["tenant_counts"]["active"], 4);
    assert_eq!(body["tenant_counts"]["overdue"], 1);
    assert_eq!(body["properties"].as_array().unwrap().len(), 3);
}
