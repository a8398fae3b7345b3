// src/tests/router_tests/inbox_tests.rs
use crate::tests::utils::*;

#[test]
fn renter_messages_read_and_reply() {
    let app = renter_app();

    let body = body_json(send(&app, get("/messages")));
    assert_eq!(body["messages"].as_array().unwrap().len(), 3);
    assert_eq!(body["unread_count"], 1);

    let body = body_json(send(&app, post("/messages/2/read", "")));
    assert_eq!(body["unread_count"], 0);

    let resp = send(&app, post("/messages/1/reply", "content=Thanks+Sarah%21"));
    assert_eq!(resp.status(), 201);
    let reply = body_json(resp);
    assert_eq!(reply["subject"], "Re: Welcome to Your New Home!");
    assert_eq!(reply["content"], "Thanks Sarah!");
    assert_eq!(reply["from"], "tenant");
    assert_eq!(reply["reply_to"], "1");
    assert_eq!(reply["is_read"], true);

    let body = body_json(send(&app, get("/messages")));
    assert_eq!(body["messages"].as_array().unwrap().len(), 4);
    assert_eq!(body["unread_count"], 0);
}

#[test]
fn reply_errors() {
    let app = renter_app();
    assert_eq!(send(&app, post("/messages/1/reply", "content=+")).status(), 400);
    assert_eq!(send(&app, post("/messages/42/reply", "content=hi")).status(), 404);
    assert_eq!(send(&app, post("/messages/42/read", "")).status(), 404);
}

#[test]
fn landlord_sees_own_inbox() {
    let app = landlord_app();
    let body = body_json(send(&app, get("/messages")));
    assert_eq!(body["messages"].as_array().unwrap().len(), 5);
    assert_eq!(body["unread_count"], 1);
    assert_eq!(body["messages"][0]["subject"], "Urgent: Kitchen Sink Leak");
}

#[test]
fn renter_submits_maintenance_request() {
    let app = renter_app();

    let body = body_json(send(&app, get("/maintenance")));
    assert_eq!(body["requests"].as_array().unwrap().len(), 2);
    assert_eq!(body["pending_count"], 0);

    let resp = send(
        &app,
        post(
            "/maintenance",
            "type=plumbing&priority=high&description=Bathroom+tap+drips&preferred_date=2025-06-04",
        ),
    );
    assert_eq!(resp.status(), 201);
    let created = body_json(resp);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["submitted"], "2025-05-31");
    assert_eq!(created["scheduled"], "2025-06-04");

    let body = body_json(send(&app, get("/maintenance")));
    assert_eq!(body["pending_count"], 1);
    assert_eq!(body["requests"][0]["description"], "Bathroom tap drips");
}

#[test]
fn maintenance_validation_and_roles() {
    let renter = renter_app();
    assert_eq!(
        send(&renter, post("/maintenance", "type=&description=x")).status(),
        400
    );

    let landlord = landlord_app();
    assert_eq!(
        send(&landlord, post("/maintenance", "type=hvac&description=x")).status(),
        401
    );
    let body = body_json(send(&landlord, get("/maintenance")));
    assert_eq!(body["pending_count"], 1);
}
