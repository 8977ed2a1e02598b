#![allow(clippy::unused_async)]
//! Ordered collections and popups.

use salvo::http::StatusCode;

use super::helpers::*;

type Service = salvo::Service;

async fn create(service: &Service, token: &str, path: &str, body: serde_json::Value) -> serde_json::Value {
    TestRequest::post(path)
        .session(token)
        .json(&body)
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .json()
}

fn titles(list: &serde_json::Value, field: &str) -> Vec<String> {
    list.as_array()
        .expect("list body")
        .iter()
        .map(|row| row[field].as_str().expect("string field").to_string())
        .collect()
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn schedule_lists_by_display_order() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    for (title, order) in [("Dinner", 2), ("Ceremony", 0), ("Cocktails", 1)] {
        create(
            &service,
            &token,
            "/api/schedule",
            serde_json::json!({
                "title": title,
                "eventTime": "2026-06-14T15:00:00Z",
                "icon": "ring",
                "displayOrder": order
            }),
        )
        .await;
    }

    let list = TestRequest::get("/api/schedule").send(&service).await.json();
    assert_eq!(titles(&list, "title"), ["Ceremony", "Cocktails", "Dinner"]);

    create(
        &service,
        &token,
        "/api/schedule",
        serde_json::json!({ "title": "Send-off", "eventTime": 1_781_460_000_000_i64, "displayOrder": 10 }),
    )
    .await;

    let list = TestRequest::get("/api/schedule").send(&service).await.json();
    assert_eq!(
        titles(&list, "title"),
        ["Ceremony", "Cocktails", "Dinner", "Send-off"]
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn reorder_renumbers_in_request_order() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let mut ids = Vec::new();
    for (name, order) in [("Maid of honour", 0), ("Best man", 1), ("Flower girl", 2)] {
        let row = create(
            &service,
            &token,
            "/api/wedding-party",
            serde_json::json!({ "name": name, "role": "party", "displayOrder": order }),
        )
        .await;
        ids.push(row["id"].clone());
    }

    let reordered = TestRequest::post("/api/wedding-party/reorder")
        .session(&token)
        .json(&serde_json::json!({ "ids": [ids[2], ids[0], ids[1]] }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        titles(&reordered, "name"),
        ["Flower girl", "Maid of honour", "Best man"]
    );
    assert_eq!(reordered[0]["displayOrder"], 0);
    assert_eq!(reordered[2]["displayOrder"], 2);

    let mut events = Vec::new();
    for (title, order) in [("Ceremony", 0), ("Dinner", 1)] {
        let row = create(
            &service,
            &token,
            "/api/schedule",
            serde_json::json!({
                "title": title,
                "eventTime": "2026-06-14T15:00:00Z",
                "displayOrder": order
            }),
        )
        .await;
        events.push(row["id"].clone());
    }

    let schedule = TestRequest::post("/api/schedule/reorder")
        .session(&token)
        .json(&serde_json::json!({ "ids": [events[1], events[0]] }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(titles(&schedule, "title"), ["Dinner", "Ceremony"]);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn photo_caption_patch_leaves_other_fields() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let photo = create(
        &service,
        &token,
        "/api/photos",
        serde_json::json!({
            "url": "https://cdn.example.com/hero.jpg",
            "caption": "Golden hour",
            "category": "hero",
            "displayOrder": 3
        }),
    )
    .await;
    let id = photo["id"].as_str().expect("id");

    let updated = TestRequest::patch(&format!("/api/photos/{id}"))
        .session(&token)
        .json(&serde_json::json!({ "caption": "Blue hour" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated["caption"], "Blue hour");
    assert_eq!(updated["url"], photo["url"]);
    assert_eq!(updated["category"], "hero");
    assert_eq!(updated["displayOrder"], 3);

    let cleared = TestRequest::patch(&format!("/api/photos/{id}"))
        .session(&token)
        .json(&serde_json::json!({ "caption": null }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(cleared["caption"], serde_json::Value::Null);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn photos_filter_by_category() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    for (url, category) in [("a.jpg", "gallery"), ("b.jpg", "venue"), ("c.jpg", "gallery")] {
        create(
            &service,
            &token,
            "/api/photos",
            serde_json::json!({ "url": url, "category": category }),
        )
        .await;
    }

    let venue = TestRequest::get("/api/photos?category=venue")
        .send(&service)
        .await
        .json();
    assert_eq!(titles(&venue, "url"), ["b.jpg"]);

    let all = TestRequest::get("/api/photos").send(&service).await.json();
    assert_eq!(all.as_array().map(Vec::len), Some(3));
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn missing_rows_are_not_found_and_deletes_are_idempotent() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    let track = create(
        &service,
        &token,
        "/api/music-tracks",
        serde_json::json!({ "title": "Clair de Lune", "url": "https://cdn.example.com/clair.mp3" }),
    )
    .await;
    let path = format!("/api/music-tracks/{}", track["id"].as_str().expect("id"));

    for _ in 0..2 {
        TestRequest::delete(&path)
            .session(&token)
            .send(&service)
            .await
            .assert_status(StatusCode::OK)
            .assert_body_contains("\"success\":true");
    }

    TestRequest::get(&path)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    TestRequest::patch(&path)
        .session(&token)
        .json(&serde_json::json!({ "title": "Gymnopédie" }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn music_tracks_filter_active() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    create(
        &service,
        &token,
        "/api/music-tracks",
        serde_json::json!({ "title": "On", "url": "on.mp3", "displayOrder": 0 }),
    )
    .await;
    create(
        &service,
        &token,
        "/api/music-tracks",
        serde_json::json!({ "title": "Off", "url": "off.mp3", "displayOrder": 1, "isActive": false }),
    )
    .await;

    let active = TestRequest::get("/api/music-tracks?activeOnly=true")
        .send(&service)
        .await
        .json();
    assert_eq!(titles(&active, "title"), ["On"]);

    let all = TestRequest::get("/api/music-tracks").send(&service).await.json();
    assert_eq!(titles(&all, "title"), ["On", "Off"]);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn popups_are_unique_per_kind() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    TestRequest::get("/api/popups/kind/welcome")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("null");

    let welcome = create(
        &service,
        &token,
        "/api/popups",
        serde_json::json!({ "kind": "welcome", "imageUrl": "https://cdn.example.com/w.png" }),
    )
    .await;
    assert_eq!(welcome["isActive"], true);

    let response = TestRequest::post("/api/popups")
        .session(&token)
        .json(&serde_json::json!({ "kind": "welcome", "imageUrl": "https://cdn.example.com/w2.png" }))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
    assert!(response.error_message().contains("welcome"));
    assert_eq!(test_db.count_rows("popup").await.expect("count"), 1);

    let by_kind = TestRequest::get("/api/popups/kind/welcome")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(by_kind["id"], welcome["id"]);

    TestRequest::get("/api/popups/kind/banner")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
