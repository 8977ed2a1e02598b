#![allow(clippy::unused_async)]
//! Requests answered before any query runs.
//!
//! These tests use a service whose database is unreachable, so they need no
//! PostgreSQL and run unconditionally.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn healthcheck_is_public() {
    let service = create_offline_test_service();

    let response = TestRequest::get("/api/healthcheck")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body_string(), "OK");
}

/// ## Summary
/// Every admin-only route rejects a request without a session cookie.
#[test_log::test(tokio::test)]
async fn admin_routes_require_a_session() {
    let service = create_offline_test_service();
    let id = uuid::Uuid::now_v7();

    let requests = [
        TestRequest::get("/api/auth/me"),
        TestRequest::post("/api/auth/change-password"),
        TestRequest::patch("/api/auth/profile"),
        TestRequest::post("/api/couple-info"),
        TestRequest::post("/api/settings"),
        TestRequest::post("/api/livestream"),
        TestRequest::post("/api/schedule"),
        TestRequest::post("/api/schedule/reorder"),
        TestRequest::patch(&format!("/api/schedule/{id}")),
        TestRequest::delete(&format!("/api/schedule/{id}")),
        TestRequest::post("/api/photos"),
        TestRequest::delete(&format!("/api/photos/{id}")),
        TestRequest::post("/api/wedding-party"),
        TestRequest::patch(&format!("/api/music-tracks/{id}")),
        TestRequest::post("/api/popups"),
        TestRequest::patch(&format!("/api/messages/{id}/approve")),
        TestRequest::delete(&format!("/api/messages/{id}")),
        TestRequest::patch(&format!("/api/guest-photos/{id}/approve")),
        TestRequest::get("/api/rsvps"),
        TestRequest::get(&format!("/api/rsvps/{id}")),
        TestRequest::patch(&format!("/api/rsvps/{id}")),
        TestRequest::delete(&format!("/api/rsvps/{id}")),
        TestRequest::get("/api/dashboard/summary"),
    ];

    for request in requests {
        let response = request
            .json(&serde_json::json!({ "approved": true }))
            .send(&service)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_message(), "Authentication required");
    }
}

#[test_log::test(tokio::test)]
async fn rsvp_without_email_names_the_field() {
    let service = create_offline_test_service();

    let response = TestRequest::post("/api/rsvps")
        .json(&serde_json::json!({ "guestName": "Ann", "attending": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("email"), "{}", response.body_string());
}

#[test_log::test(tokio::test)]
async fn rsvp_field_rules_are_reported() {
    let service = create_offline_test_service();

    let response = TestRequest::post("/api/rsvps")
        .json(&serde_json::json!({
            "guestName": "",
            "email": "not-an-address",
            "attending": true,
            "guestCount": 0
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let message = response.error_message();
    assert!(message.contains("email"), "{message}");
    assert!(message.contains("guestCount"), "{message}");
    assert!(message.contains("guestName"), "{message}");
}

#[test_log::test(tokio::test)]
async fn malformed_json_is_rejected() {
    let service = create_offline_test_service();

    let response = TestRequest::post("/api/messages")
        .header("Content-Type", "application/json")
        .body("{\"guestName\": ")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "request body is not valid JSON");
}

#[test_log::test(tokio::test)]
async fn empty_guest_message_is_rejected() {
    let service = create_offline_test_service();

    let response = TestRequest::post("/api/messages")
        .json(&serde_json::json!({ "guestName": "Ann", "message": "" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("message"));
}

#[test_log::test(tokio::test)]
async fn login_requires_both_fields() {
    let service = create_offline_test_service();

    TestRequest::post("/api/auth/login")
        .json(&serde_json::json!({ "username": "admin" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("password");
}

#[test_log::test(tokio::test)]
async fn logout_without_session_clears_the_cookie() {
    let service = create_offline_test_service();

    let response = TestRequest::post("/api/auth/logout")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("\"success\":true");

    assert!(
        response
            .set_cookies()
            .iter()
            .any(|cookie| cookie.starts_with(&format!("{TEST_COOKIE_NAME}=;"))
                || cookie.starts_with(&format!("{TEST_COOKIE_NAME}=\"\""))),
        "{:?}",
        response.set_cookies()
    );
    assert!(response.session_token().is_none());
}

#[test_log::test(tokio::test)]
async fn malformed_id_is_a_bad_request() {
    let service = create_offline_test_service();

    let response = TestRequest::get("/api/schedule/not-a-uuid")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("id"));
}
