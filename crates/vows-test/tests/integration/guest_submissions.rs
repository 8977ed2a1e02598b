#![allow(clippy::unused_async)]
//! Public submissions and their moderation.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn rsvp_submission_is_public() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    let rsvp = TestRequest::post("/api/rsvps")
        .json(&serde_json::json!({
            "guestName": "Ann",
            "email": "ann@x.com",
            "attending": true,
            "guestCount": 2
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(rsvp["id"].as_str().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    assert_eq!(rsvp["attending"], true);
    assert_eq!(rsvp["guestCount"], 2);
    assert!(rsvp["createdAt"].is_string());
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn rsvps_are_admin_readable_and_filterable() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    for (name, attending) in [("Ann", true), ("Ben", false), ("Cat", true)] {
        TestRequest::post("/api/rsvps")
            .json(&serde_json::json!({
                "guestName": name,
                "email": format!("{}@example.com", name.to_lowercase()),
                "attending": attending
            }))
            .send(&service)
            .await
            .assert_status(StatusCode::OK);
    }

    let declined = TestRequest::get("/api/rsvps?attending=false")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let declined = declined.as_array().expect("list");
    assert_eq!(declined.len(), 1);
    assert_eq!(declined[0]["guestName"], "Ben");
    assert_eq!(declined[0]["guestCount"], 1);

    let future = TestRequest::get("/api/rsvps?from=2999-01-01")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(future, serde_json::json!([]));

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let same_day = TestRequest::get(&format!("/api/rsvps?from={today}&to={today}"))
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(same_day.as_array().map(Vec::len), Some(3));

    let messages_today = TestRequest::get(&format!("/api/messages?to={today}"))
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(messages_today, serde_json::json!([]));

    let summary = TestRequest::get("/api/dashboard/summary")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(summary["rsvpAttending"], 2);
    assert_eq!(summary["rsvpDeclining"], 1);
    assert_eq!(summary["totalGuests"], 2);
}

/// ## Summary
/// Approval needs a session and changes nothing but the flag.
#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn message_approval_flow() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    let message = TestRequest::post("/api/messages")
        .json(&serde_json::json!({ "guestName": "Ann", "message": "Congratulations!" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(message["approved"], false);
    let approve_path = format!("/api/messages/{}/approve", message["id"].as_str().expect("id"));

    TestRequest::patch(&approve_path)
        .json(&serde_json::json!({ "approved": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let token = sign_in(&test_db, &service).await;

    let approved = TestRequest::patch(&approve_path)
        .session(&token)
        .json(&serde_json::json!({ "approved": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(approved["approved"], true);
    assert_eq!(approved["message"], "Congratulations!");
    assert_eq!(approved["guestName"], "Ann");
    assert_eq!(approved["createdAt"], message["createdAt"]);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn public_message_list_shows_only_approved() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let empty = TestRequest::get("/api/messages?approved=true")
        .send(&service)
        .await
        .json();
    assert_eq!(empty, serde_json::json!([]));

    let mut ids = Vec::new();
    for guest in ["Ann", "Ben"] {
        let row = TestRequest::post("/api/messages")
            .json(&serde_json::json!({ "guestName": guest, "message": "Cheers" }))
            .send(&service)
            .await
            .json();
        ids.push(row["id"].as_str().expect("id").to_string());
    }

    TestRequest::patch(&format!("/api/messages/{}/approve", ids[0]))
        .session(&token)
        .json(&serde_json::json!({ "approved": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    // Public callers cannot ask for pending messages.
    let public = TestRequest::get("/api/messages?approved=false")
        .send(&service)
        .await
        .json();
    let public = public.as_array().expect("list");
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["guestName"], "Ann");

    let pending = TestRequest::get("/api/messages?approved=false")
        .session(&token)
        .send(&service)
        .await
        .json();
    let pending = pending.as_array().expect("list");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["guestName"], "Ben");

    let everything = TestRequest::get("/api/messages")
        .session(&token)
        .send(&service)
        .await
        .json();
    assert_eq!(everything.as_array().map(Vec::len), Some(2));
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn guest_photos_are_moderated() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let photo = TestRequest::post("/api/guest-photos")
        .json(&serde_json::json!({
            "url": "https://cdn.example.com/guest.jpg",
            "guestName": "Ann",
            "approved": true
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    // Submitters cannot approve their own upload.
    assert_eq!(photo["approved"], false);

    let public = TestRequest::get("/api/guest-photos").send(&service).await.json();
    assert_eq!(public, serde_json::json!([]));

    let id = photo["id"].as_str().expect("id");
    TestRequest::patch(&format!("/api/guest-photos/{id}/approve"))
        .session(&token)
        .json(&serde_json::json!({ "approved": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let public = TestRequest::get("/api/guest-photos").send(&service).await.json();
    assert_eq!(public.as_array().map(Vec::len), Some(1));

    for _ in 0..2 {
        TestRequest::delete(&format!("/api/guest-photos/{id}"))
            .session(&token)
            .send(&service)
            .await
            .assert_status(StatusCode::OK);
    }
    assert_eq!(test_db.count_rows("guest_photo").await.expect("count"), 0);
}
