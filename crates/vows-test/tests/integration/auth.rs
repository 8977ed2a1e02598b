#![allow(clippy::unused_async)]
//! Admin sessions: login, logout, password change, profile.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn login_sets_an_http_only_cookie() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    test_db
        .seed_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
        .await
        .expect("Failed to seed admin");

    let response = TestRequest::post("/api/auth/login")
        .json(&serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["username"], ADMIN_USERNAME);
    assert!(body.get("passwordHash").is_none());

    let cookie = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with(TEST_COOKIE_NAME))
        .expect("session cookie")
        .to_string();
    assert!(cookie.contains("HttpOnly"), "{cookie}");

    let token = response.session_token().expect("token");
    let me = TestRequest::get("/api/auth/me")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(me["username"], ADMIN_USERNAME);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn bad_credentials_look_alike() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    test_db
        .seed_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
        .await
        .expect("Failed to seed admin");

    let wrong_password = TestRequest::post("/api/auth/login")
        .json(&serde_json::json!({ "username": ADMIN_USERNAME, "password": "wrong password" }))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let unknown_user = TestRequest::post("/api/auth/login")
        .json(&serde_json::json!({ "username": "nobody", "password": ADMIN_PASSWORD }))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password.body, unknown_user.body);
    assert!(wrong_password.session_token().is_none());
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn logout_revokes_the_session() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;

    TestRequest::post("/api/auth/logout")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::get("/api/auth/me")
        .session(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(test_db.count_rows("session").await.expect("count"), 0);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn unknown_token_is_treated_as_public() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    TestRequest::get("/api/auth/me")
        .session("not-a-real-token")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    TestRequest::get("/api/schedule")
        .session("not-a-real-token")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn password_change_signs_out_other_sessions() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let first = sign_in(&test_db, &service).await;
    let second = login(&service, ADMIN_USERNAME, ADMIN_PASSWORD).await;

    TestRequest::post("/api/auth/change-password")
        .session(&first)
        .json(&serde_json::json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": "short" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("newPassword");

    TestRequest::post("/api/auth/change-password")
        .session(&first)
        .json(&serde_json::json!({
            "currentPassword": ADMIN_PASSWORD,
            "newPassword": "a much longer passphrase"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::get("/api/auth/me")
        .session(&first)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    TestRequest::get("/api/auth/me")
        .session(&second)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    login(&service, ADMIN_USERNAME, "a much longer passphrase").await;
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL (set TEST_DATABASE_URL)"]
async fn profile_username_must_be_unique() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;
    let token = sign_in(&test_db, &service).await;
    test_db
        .seed_admin("planner", "planner password")
        .await
        .expect("Failed to seed second admin");

    TestRequest::patch("/api/auth/profile")
        .session(&token)
        .json(&serde_json::json!({ "username": "planner" }))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);

    let updated = TestRequest::patch("/api/auth/profile")
        .session(&token)
        .json(&serde_json::json!({ "displayName": "Wedding Admin", "email": null }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(updated["displayName"], "Wedding Admin");
    assert_eq!(updated["email"], serde_json::Value::Null);
}
