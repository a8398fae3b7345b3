// src/tests/router_tests/auth_tests.rs
use crate::tests::utils::*;

#[test]
fn signed_out_root_shows_landing() {
    let app = test_app();
    let resp = send(&app, get("/"));
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["signed_in"], false);
    assert_eq!(body["login"], "/login");
}

#[test]
fn protected_views_redirect_home_when_signed_out() {
    let app = test_app();
    for path in ["/dashboard", "/payments", "/tenants", "/messages", "/session"] {
        let resp = send(&app, get(path));
        assert_eq!(resp.status(), 302, "{path}");
        assert_eq!(location(&resp), "/", "{path}");
    }
}

#[test]
fn renter_login_stores_session_and_lands_on_dashboard() {
    let app = test_app();

    let resp = send(&app, post("/login", "email=john%40example.com&password=pw"));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let user = body_json(send(&app, get("/session")));
    assert_eq!(user["role"], "renter");
    assert_eq!(user["name"], "John Smith");
    assert_eq!(user["email"], "john@example.com");
    assert_eq!(user["property_name"], "Apartment #202");

    let resp = send(&app, get("/"));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn landlord_login() {
    let app = landlord_app();
    let user = body_json(send(&app, get("/session")));
    assert_eq!(user["role"], "landlord");
    assert_eq!(user["id"], "2");
    assert_eq!(user["name"], "Sarah Johnson");
    assert!(user.get("property_id").is_none());
}

#[test]
fn empty_email_is_rejected() {
    let app = test_app();
    let resp = send(&app, post("/login", "email=&password=pw"));
    assert_eq!(resp.status(), 400);

    assert_eq!(location(&send(&app, get("/dashboard"))), "/");
}

#[test]
fn logout_clears_session() {
    let app = renter_app();

    let resp = send(&app, post("/logout", ""));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");

    assert_eq!(location(&send(&app, get("/session"))), "/");
}

#[test]
fn views_are_gated_by_role() {
    let renter = renter_app();
    let resp = send(&renter, get("/tenants"));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let landlord = landlord_app();
    for path in ["/payments", "/payments/export", "/reminders"] {
        let resp = send(&landlord, get(path));
        assert_eq!(resp.status(), 302, "{path}");
        assert_eq!(location(&resp), "/dashboard", "{path}");
    }
    assert_eq!(send(&landlord, post("/autopay", "enabled=true")).status(), 302);
}

#[test]
fn unknown_route_is_not_found() {
    let app = renter_app();
    assert_eq!(send(&app, get("/nope")).status(), 404);
    assert_eq!(send(&app, post("/dashboard", "")).status(), 404);
}
