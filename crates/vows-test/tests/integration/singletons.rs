#![allow(clippy::unused_async)]
//! Singleton content: couple info, site settings, livestream.

use salvo::http::StatusCode;

use super::helpers::*;

fn timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value.as_str().expect("timestamp string"))
        .expect("RFC 3339 timestamp")
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn absent_settings_read_as_null() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    for path in ["/api/settings", "/api/couple-info", "/api/livestream"] {
        let response = TestRequest::get(path)
            .send(&service)
            .await
            .assert_status(StatusCode::OK);
        assert_eq!(response.json(), serde_json::Value::Null, "{path}");
    }
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn second_settings_save_updates_the_single_row() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let first = TestRequest::post("/api/settings")
        .session(&token)
        .json(&serde_json::json!({ "venueName": "Old Mill", "footerText": "See you there" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let second = TestRequest::post("/api/settings")
        .session(&token)
        .json(&serde_json::json!({ "venueName": "Lakeside Barn" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(first["id"], second["id"]);
    assert!(timestamp(&second["updatedAt"]) > timestamp(&first["updatedAt"]));

    let current = TestRequest::get("/api/settings")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(current["venueName"], "Lakeside Barn");
    assert_eq!(current["footerText"], "See you there");
    assert_eq!(test_db.count_rows("site_settings").await.expect("count"), 1);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn settings_playlist_round_trips_as_records() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let playlist = serde_json::json!([
        { "url": "https://cdn.example.com/first-dance.mp3", "name": "First dance" },
        { "url": "https://cdn.example.com/recessional.mp3", "name": null }
    ]);

    let saved = TestRequest::post("/api/settings")
        .session(&token)
        .json(&serde_json::json!({ "backgroundMusicEnabled": true, "backgroundPlaylist": playlist }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(saved["backgroundMusicEnabled"], true);
    assert_eq!(saved["backgroundPlaylist"][0]["name"], "First dance");
    assert_eq!(
        saved["backgroundPlaylist"][1]["url"],
        "https://cdn.example.com/recessional.mp3"
    );
    assert_eq!(saved["backgroundPlaylist"][1]["name"], serde_json::Value::Null);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn first_couple_info_needs_a_wedding_date() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let response = TestRequest::post("/api/couple-info")
        .session(&token)
        .json(&serde_json::json!({ "brideName": "Ann", "groomName": "Ben" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("weddingDate"));

    let created = TestRequest::post("/api/couple-info")
        .session(&token)
        .json(&serde_json::json!({
            "brideName": "Ann",
            "groomName": "Ben",
            "weddingDate": "2026-06-14"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(created["brideName"], "Ann");

    // Later saves may omit fields that are already stored.
    let updated = TestRequest::post("/api/couple-info")
        .session(&token)
        .json(&serde_json::json!({ "loveStory": "We met at a bus stop." }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(updated["brideName"], "Ann");
    assert_eq!(updated["weddingDate"], created["weddingDate"]);
    assert_eq!(updated["loveStory"], "We met at a bus stop.");
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn invalid_date_names_the_field() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let response = TestRequest::post("/api/livestream")
        .session(&token)
        .json(&serde_json::json!({
            "streamUrl": "https://youtube.com/live/abc",
            "startTime": "next saturday"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("startTime"));
}
