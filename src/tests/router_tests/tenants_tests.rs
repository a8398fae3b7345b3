// src/tests/router_tests/tenants_tests.rs
use crate::tests::utils::*;

const NEW_TENANT: &str = "name=Ana+Lopez&email=ana%40email.com&phone=555-0100\
&property=Downtown+Lofts&unit=Unit+402&rent_amount=2100\
&lease_start=2025-06-01&lease_end=2026-05-31&status=pending";

fn names(body: &serde_json::Value) -> Vec<String> {
    body["tenants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn lists_tenants_with_filters() {
    let app = landlord_app();

    let body = body_json(send(&app, get("/tenants")));
    assert_eq!(names(&body).len(), 5);
    assert_eq!(body["summary"]["total"], 6500.0);
    assert_eq!(body["summary"]["count"], 3);
    assert_eq!(body["counts"]["active"], 4);

    let body = body_json(send(&app, get("/tenants?payment=late")));
    assert_eq!(names(&body), ["Michael Brown"]);
    assert_eq!(body["filtered_summary"]["count"], 0);

    let body = body_json(send(&app, get("/tenants?search=downtown")));
    assert_eq!(names(&body), ["Emily Johnson"]);
    assert_eq!(body["filtered_summary"]["total"], 2200.0);

    let body = body_json(send(&app, get("/tenants?status=active&payment=overdue")));
    assert!(names(&body).is_empty());
    assert_eq!(body["filtered_summary"]["total"], 0.0);
}

#[test]
fn summary_covers_all_tenants_under_any_filter() {
    let app = landlord_app();

    for uri in ["/tenants?payment=overdue", "/tenants?search=downtown", "/tenants?status=expired"] {
        let body = body_json(send(&app, get(uri)));
        assert_eq!(body["summary"]["total"], 6500.0, "{uri}");
        assert_eq!(body["summary"]["count"], 3, "{uri}");
        assert_eq!(body["counts"]["total"], 5, "{uri}");
    }
}

#[test]
fn add_tenant_prepends() {
    let app = landlord_app();

    let resp = send(&app, post("/tenants", NEW_TENANT));
    assert_eq!(resp.status(), 201);
    let tenant = body_json(resp);
    assert_eq!(tenant["name"], "Ana Lopez");
    assert_eq!(tenant["status"], "pending");
    assert_eq!(tenant["payment_status"], "current");
    assert_eq!(tenant["last_payment"], "2025-05-31");

    let body = body_json(send(&app, get("/tenants")));
    assert_eq!(names(&body)[0], "Ana Lopez");
    assert_eq!(body["counts"]["total"], 6);

    let id = tenant["id"].as_str().unwrap();
    let shown = body_json(send(&app, get(&format!("/tenants/{id}"))));
    assert_eq!(shown["unit"], "Unit 402");
}

#[test]
fn add_tenant_validates() {
    let app = landlord_app();

    let missing_name = NEW_TENANT.replace("name=Ana+Lopez", "name=");
    assert_eq!(send(&app, post("/tenants", &missing_name)).status(), 400);

    let zero_rent = NEW_TENANT.replace("rent_amount=2100", "rent_amount=0");
    assert_eq!(send(&app, post("/tenants", &zero_rent)).status(), 400);

    let infinite_rent = NEW_TENANT.replace("rent_amount=2100", "rent_amount=inf");
    assert_eq!(send(&app, post("/tenants", &infinite_rent)).status(), 400);

    let bad_date = NEW_TENANT.replace("lease_end=2026-05-31", "lease_end=someday");
    assert_eq!(send(&app, post("/tenants", &bad_date)).status(), 400);

    let body = body_json(send(&app, get("/tenants")));
    assert_eq!(body["counts"]["total"], 5);
    assert_eq!(body["summary"]["total"], 6500.0);
}

#[test]
fn show_and_update_tenant() {
    let app = landlord_app();

    let shown = body_json(send(&app, get("/tenants/3")));
    assert_eq!(shown["name"], "Michael Brown");
    assert_eq!(send(&app, get("/tenants/99")).status(), 404);

    let resp = send(&app, post("/tenants/3", NEW_TENANT));
    assert_eq!(resp.status(), 200);
    let updated = body_json(resp);
    assert_eq!(updated["id"], "3");
    assert_eq!(updated["name"], "Ana Lopez");

    assert_eq!(send(&app, post("/tenants/99", NEW_TENANT)).status(), 404);
}

#[test]
fn delete_requires_confirmation() {
    let app = landlord_app();

    let body = body_json(send(&app, post("/tenants/1/delete", "")));
    assert_eq!(body["deleted"], false);
    assert_eq!(send(&app, get("/tenants/1")).status(), 200);

    let body = body_json(send(&app, post("/tenants/1/delete", "confirm=true")));
    assert_eq!(body["deleted"], true);
    assert_eq!(body["tenant"]["name"], "John Smith");
    assert_eq!(send(&app, get("/tenants/1")).status(), 404);

    assert_eq!(send(&app, post("/tenants/1/delete", "confirm=true")).status(), 404);
}
