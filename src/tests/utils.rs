// src/tests/utils.rs
use std::io::Read;
use std::sync::Arc;

use astra::{Body, Request, Response};
use chrono::{DateTime, TimeZone, Utc};
use http::Method;

// astra's Request is an alias, so the builder comes from http.
type HttpRequest = http::Request<()>;

use crate::app::{App, FixedClock};
use crate::config::SimulationConfig;
use crate::db::{init_db, Database};
use crate::responses::error_response;
use crate::router::handle;

/// The day before rent is due on the seeded data.
pub fn may_31() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 31, 9, 0, 0).unwrap()
}

/// In-memory DB, no simulated delays, clock pinned to `now`.
pub fn test_app_at(now: DateTime<Utc>) -> App {
    let db = Database::in_memory();
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    App::new(db, SimulationConfig::instant(), Arc::new(FixedClock(now)))
}

pub fn test_app() -> App {
    test_app_at(may_31())
}

pub fn get(uri: &str) -> Request {
    HttpRequest::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, form: &str) -> Request {
    HttpRequest::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

/// Runs the request the way the server does, errors included.
pub fn send(app: &App, req: Request) -> Response {
    handle(req, app).unwrap_or_else(error_response)
}

pub fn body_json(resp: Response) -> serde_json::Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("not JSON ({e}): {body}"))
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn sign_in(app: &App, email: &str) {
    let resp = send(app, post("/login", &format!("email={email}&password=secret")));
    assert_eq!(resp.status(), 302, "login failed for {email}");
}

pub fn renter_app() -> App {
    let app = test_app();
    sign_in(&app, "john%40example.com");
    app
}

pub fn landlord_app() -> App {
    let app = test_app();
    sign_in(&app, "landlord%40example.com");
    app
}
