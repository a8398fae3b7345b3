// src/tests/router_tests/payments_tests.rs
use std::io::Read;

use crate::tests::utils::*;

#[test]
fn lists_all_payments_with_summary() {
    let app = renter_app();
    let body = body_json(send(&app, get("/payments")));

    assert_eq!(body["payments"].as_array().unwrap().len(), 8);
    assert_eq!(body["summary"]["total"], 12000.0);
    assert_eq!(body["summary"]["count"], 8);
    assert_eq!(body["summary"]["average"], 1500.0);
    assert_eq!(body["total_display"], "$12,000");
}

#[test]
fn filters_combine() {
    let app = renter_app();

    let body = body_json(send(&app, get("/payments?search=BANK&status=completed&range=year")));
    let refs: Vec<&str> = body["payments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["reference"].as_str().unwrap())
        .collect();
    assert_eq!(refs, ["PAY-2024-012", "PAY-2024-009", "PAY-2024-006"]);
    assert_eq!(body["filtered_summary"]["total"], 4500.0);

    let body = body_json(send(&app, get("/payments?range=30days")));
    assert!(body["payments"].as_array().unwrap().is_empty());
    assert_eq!(body["filtered_summary"]["total"], 0.0);
    assert_eq!(body["filtered_summary"]["count"], 0);
    assert_eq!(body["filtered_summary"]["average"], 0.0);
}

#[test]
fn summary_covers_full_history_under_any_filter() {
    let app = renter_app();

    for uri in ["/payments?status=failed", "/payments?search=bank", "/payments?range=30days"] {
        let body = body_json(send(&app, get(uri)));
        assert_eq!(body["summary"]["total"], 12000.0, "{uri}");
        assert_eq!(body["summary"]["count"], 8, "{uri}");
        assert_eq!(body["summary"]["average"], 1500.0, "{uri}");
        assert_eq!(body["total_display"], "$12,000", "{uri}");
    }

    let body = body_json(send(&app, get("/payments?status=failed")));
    assert!(body["payments"].as_array().unwrap().is_empty());
}

#[test]
fn submitting_a_payment_records_and_confirms() {
    let app = renter_app();

    let resp = send(&app, post("/payments", "amount=1500&method=bank"));
    assert_eq!(resp.status(), 201);

    let body = body_json(resp);
    assert_eq!(body["payment"]["reference"], "PAY-2025-009");
    assert_eq!(body["payment"]["method"], "Bank Transfer");
    assert_eq!(body["payment"]["status"], "completed");
    assert_eq!(body["payment"]["date"], "2025-05-31");
    assert_eq!(body["amount_display"], "$1,500");
    assert_eq!(body["next_due_date"], "2025-06-01");
    assert_eq!(body["confirmation"]["title"], "Payment Confirmed");
    assert_eq!(body["confirmation"]["is_read"], false);

    let list = body_json(send(&app, get("/payments")));
    assert_eq!(list["payments"].as_array().unwrap().len(), 9);
    assert_eq!(list["payments"][0]["reference"], "PAY-2025-009");

    let body = body_json(send(&app, post("/payments", "")));
    assert_eq!(body["payment"]["reference"], "PAY-2025-010");
    assert_eq!(body["payment"]["amount"], 1500.0);
    assert_eq!(body["payment"]["method"], "Credit Card");
}

#[test]
fn invalid_amounts_are_rejected() {
    let app = renter_app();
    assert_eq!(send(&app, post("/payments", "amount=0")).status(), 400);
    assert_eq!(send(&app, post("/payments", "amount=-20")).status(), 400);
    assert_eq!(send(&app, post("/payments", "amount=lots")).status(), 400);
    assert_eq!(send(&app, post("/payments", "amount=inf")).status(), 400);
    assert_eq!(send(&app, post("/payments", "amount=infinity")).status(), 400);
    assert_eq!(send(&app, post("/payments", "amount=NaN")).status(), 400);

    let list = body_json(send(&app, get("/payments")));
    assert_eq!(list["payments"].as_array().unwrap().len(), 8);
    assert_eq!(list["summary"]["total"], 12000.0);
}

#[test]
fn export_returns_workbook() {
    let app = renter_app();
    let resp = send(&app, get("/payments/export?search=bank"));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
