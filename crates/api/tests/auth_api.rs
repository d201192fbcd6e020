//! HTTP-level integration tests for auth endpoints and admin user
//! management: login (by username, email, or contact number), token
//! refresh and rotation, logout, lockout, and RBAC enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get_auth, login_user, post_json, post_json_auth,
};
use registrar_core::roles::{ROLE_ADMIN, ROLE_STAFF, ROLE_STUDENT};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["role"], "admin");
}

/// The login identifier may be the email address, case-insensitively.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_by_email(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "mailuser", ROLE_STAFF).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "MAILUSER@TEST.EDU", &password).await;
    assert_eq!(json["user"]["id"], user.id);
}

/// The login identifier may be the contact number.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_by_contact_number(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "phoneuser", ROLE_STUDENT).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "0900-phoneuser", &password).await;
    assert_eq!(json["user"]["id"], user.id);
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", ROLE_STAFF).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "identifier": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent identifier returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "identifier": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive", ROLE_STAFF).await;
    registrar_db::repositories::UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "identifier": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Five consecutive failed logins lock the account; the correct password
/// is then rejected with 403 until the lock expires.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "locked", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());

    for _ in 0..5 {
        let body = serde_json::json!({ "identifier": "locked", "password": "bad_password" });
        let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let body = serde_json::json!({ "identifier": "locked", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens; the old refresh token is
/// revoked (rotation).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_and_rotation(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "refresher", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());

    let login_json = login_user(app.clone(), "refresher", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], login_json["refresh_token"]);

    // The rotated-out token must no longer work.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes all sessions; the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "logouter", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());

    let login_json = login_user(app.clone(), "logouter", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

/// Requests without a token are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/departments").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage bearer token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/departments", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Student tokens cannot reach staff-only write endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_student_cannot_write(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "studwrite", ROLE_STUDENT).await;

    let body = serde_json::json!({ "title": "Engineering" });
    let response = post_json_auth(app, "/api/v1/departments", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Staff tokens cannot reach admin-only user management.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_staff_cannot_manage_users(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "staffonly", ROLE_STAFF).await;

    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Admin user management
// ---------------------------------------------------------------------------

/// Admins can create users; the response carries no password material.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_creates_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "rootadmin", ROLE_ADMIN).await;

    let body = serde_json::json!({
        "username": "newstaff",
        "email": "newstaff@test.edu",
        "contact_number": "0917-555-0001",
        "password": "staff_pass_2026",
        "role": "staff",
        "first_name": "New",
        "last_name": "Staff"
    });
    let response = post_json_auth(app.clone(), "/api/v1/admin/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["username"], "newstaff");
    assert_eq!(json["role"], "staff");
    assert!(json.get("password_hash").is_none());

    // The created account can log in.
    login_user(app, "newstaff", "staff_pass_2026").await;
}

/// Creating a user with a short password is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_user_short_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "pwadmin", ROLE_ADMIN).await;

    let body = serde_json::json!({
        "username": "shortpw",
        "email": "shortpw@test.edu",
        "contact_number": "0917-555-0002",
        "password": "short",
        "role": "staff",
        "first_name": "Short",
        "last_name": "Password"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Passwords without a digit fail the account policy with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_user_digitless_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "policyadmin", ROLE_ADMIN).await;

    let body = serde_json::json!({
        "username": "weakpw",
        "email": "weakpw@test.edu",
        "contact_number": "0917-555-0007",
        "password": "justlettershere",
        "role": "staff",
        "first_name": "Weak",
        "last_name": "Password"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Duplicate usernames are rejected with 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_duplicate_username(pool: PgPool) {
    let (_user, _pw) = create_test_user(&pool, "taken", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "dupadmin", ROLE_ADMIN).await;

    let body = serde_json::json!({
        "username": "taken",
        "email": "other@test.edu",
        "contact_number": "0917-555-0003",
        "password": "staff_pass_2026",
        "role": "staff",
        "first_name": "Du",
        "last_name": "Plicate"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Deactivating a user returns 204 and blocks subsequent logins.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_deactivates_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "victim", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "deacadmin", ROLE_ADMIN).await;

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/users/{}", user.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "identifier": "victim", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// After a password reset, only the new password works.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_resets_password(pool: PgPool) {
    let (user, old_password) = create_test_user(&pool, "resetme", ROLE_STAFF).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "resetadmin", ROLE_ADMIN).await;

    let body = serde_json::json!({ "new_password": "brand_new_pass_9" });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/admin/users/{}/reset-password", user.id),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "identifier": "resetme", "password": old_password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    login_user(app, "resetme", "brand_new_pass_9").await;
}
