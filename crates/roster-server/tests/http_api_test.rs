//! HTTP surface tests against an in-memory SurrealDB instance.

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use roster_core::models::group::Group;
use roster_core::models::user::User;
use roster_server::api;
use roster_server::state::AppState;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

/// Helper: in-memory DB, migrations, router, two seeded reference users.
async fn setup() -> (TestServer, Uuid, Uuid) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    roster_db::run_migrations(&db).await.unwrap();

    let user_a = seed_user(&db, "alice").await;
    let user_b = seed_user(&db, "bob").await;

    let server = TestServer::new(api::router(AppState::new(db))).unwrap();
    (server, user_a, user_b)
}

/// Users are owned by another service, so tests seed them directly.
async fn seed_user(db: &Surreal<Db>, username: &str) -> Uuid {
    let id = Uuid::new_v4();
    db.query(
        "CREATE type::record('user', $id) SET \
         first_name = $first_name, last_name = 'Tester', \
         username = $username, email = $email, \
         phone = '555-0100', birth_date = $birth_date, \
         avatar_url = '', password_hash = 'not-a-real-hash'",
    )
    .bind(("id", id.to_string()))
    .bind(("first_name", username.to_string()))
    .bind(("username", username.to_string()))
    .bind(("email", format!("{username}@example.com")))
    .bind((
        "birth_date",
        Utc.with_ymd_and_hms(1990, 5, 4, 0, 0, 0).unwrap(),
    ))
    .await
    .unwrap()
    .check()
    .unwrap();
    id
}

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn group_payload(name: &str, member_ids: &[Uuid]) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "created_at": created_at(),
        "member_ids": member_ids,
    })
}

#[tokio::test]
async fn banner_is_served_at_root() {
    let (server, _, _) = setup().await;

    let res = server.get("/").await;
    res.assert_status_ok();
    assert!(res.text().contains("ROSTER"));
}

#[tokio::test]
async fn list_groups_starts_empty() {
    let (server, _, _) = setup().await;

    let res = server.get("/api/v1/groups").await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Group>>().len(), 0);
}

#[tokio::test]
async fn create_group_returns_201_with_record() {
    let (server, user_a, user_b) = setup().await;

    let res = server
        .post("/api/v1/groups")
        .json(&group_payload("Team", &[user_a, user_b]))
        .await;
    res.assert_status(axum::http::StatusCode::CREATED);

    let group = res.json::<Group>();
    assert_eq!(group.name, "Team");
    assert_eq!(group.created_at, created_at());

    // The returned representation does not embed the member list; the
    // members route serves it.
    let res = server
        .get(&format!("/api/v1/groups/{}/users", group.id))
        .await;
    res.assert_status_ok();
    let members = res.json::<Vec<User>>();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn get_group_roundtrip() {
    let (server, _, _) = setup().await;

    let created = server
        .post("/api/v1/groups")
        .json(&group_payload("Stable", &[]))
        .await
        .json::<Group>();

    let res = server.get(&format!("/api/v1/groups/{}", created.id)).await;
    res.assert_status_ok();
    let fetched = res.json::<Group>();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Stable");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn get_unknown_group_is_404_with_error_body() {
    let (server, _, _) = setup().await;

    let res = server
        .get(&format!("/api/v1/groups/{}", Uuid::new_v4()))
        .await;
    res.assert_status_not_found();

    let body = res.json::<Value>();
    assert!(body.get("error").is_some(), "error body must carry a message");
}

#[tokio::test]
async fn malformed_id_is_400() {
    let (server, _, _) = setup().await;

    let res = server.get("/api/v1/groups/not-a-uuid").await;
    res.assert_status_bad_request();
}

#[tokio::test]
async fn update_group_merges_present_fields() {
    let (server, _, _) = setup().await;

    let created = server
        .post("/api/v1/groups")
        .json(&group_payload("Original", &[]))
        .await
        .json::<Group>();

    let res = server
        .put(&format!("/api/v1/groups/{}", created.id))
        .json(&json!({ "name": "Renamed" }))
        .await;
    res.assert_status_ok();

    let updated = res.json::<Group>();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "Original description");

    // An empty update body changes nothing.
    let res = server
        .put(&format!("/api/v1/groups/{}", created.id))
        .json(&json!({}))
        .await;
    res.assert_status_ok();
    let unchanged = res.json::<Group>();
    assert_eq!(unchanged.name, "Renamed");
    assert_eq!(unchanged.description, "Original description");
}

#[tokio::test]
async fn update_unknown_group_is_404() {
    let (server, _, _) = setup().await;

    let res = server
        .put(&format!("/api/v1/groups/{}", Uuid::new_v4()))
        .json(&json!({ "name": "Ghost" }))
        .await;
    res.assert_status_not_found();
}

#[tokio::test]
async fn delete_group_then_get_is_404() {
    let (server, _, _) = setup().await;

    let created = server
        .post("/api/v1/groups")
        .json(&group_payload("Doomed", &[]))
        .await
        .json::<Group>();

    let res = server
        .delete(&format!("/api/v1/groups/{}", created.id))
        .await;
    res.assert_status_ok();

    let res = server.get(&format!("/api/v1/groups/{}", created.id)).await;
    res.assert_status_not_found();

    // Deleting again reports 404, not a crash.
    let res = server
        .delete(&format!("/api/v1/groups/{}", created.id))
        .await;
    res.assert_status_not_found();
}

#[tokio::test]
async fn members_of_unknown_group_is_empty_200() {
    let (server, _, _) = setup().await;

    let res = server
        .get(&format!("/api/v1/groups/{}/users", Uuid::new_v4()))
        .await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<User>>().len(), 0);
}

#[tokio::test]
async fn groups_of_user_resolves_memberships() {
    let (server, user_a, user_b) = setup().await;

    server
        .post("/api/v1/groups")
        .json(&group_payload("GroupA", &[user_a]))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/v1/groups")
        .json(&group_payload("GroupB", &[user_a, user_b]))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let res = server.get(&format!("/api/v1/groups/user/{user_a}")).await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Group>>().len(), 2);

    let res = server.get(&format!("/api/v1/groups/user/{user_b}")).await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Group>>().len(), 1);
}

#[tokio::test]
async fn groups_of_unmembered_user_is_empty_200() {
    let (server, user_a, _) = setup().await;

    let res = server.get(&format!("/api/v1/groups/user/{user_a}")).await;
    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Group>>().len(), 0);
}

#[tokio::test]
async fn failed_member_attach_is_500_and_group_persists() {
    let (server, user_a, _) = setup().await;
    let bogus = Uuid::new_v4();

    let res = server
        .post("/api/v1/groups")
        .json(&group_payload("Partial", &[user_a, bogus]))
        .await;
    res.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body = res.json::<Value>();
    assert!(body.get("error").is_some());

    // The group record survived the failed attach...
    let groups = server.get("/api/v1/groups").await.json::<Vec<Group>>();
    let group = groups
        .iter()
        .find(|g| g.name == "Partial")
        .expect("group must persist after failed member attach");

    // ...with only the members attached before the failure.
    let res = server
        .get(&format!("/api/v1/groups/{}/users", group.id))
        .await;
    let members = res.json::<Vec<User>>();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, user_a);
}

#[tokio::test]
async fn member_profiles_omit_password_hash() {
    let (server, user_a, _) = setup().await;

    server
        .post("/api/v1/groups")
        .json(&group_payload("Visible", &[user_a]))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let groups = server.get("/api/v1/groups").await.json::<Vec<Group>>();
    let res = server
        .get(&format!("/api/v1/groups/{}/users", groups[0].id))
        .await;

    let body = res.json::<Value>();
    let member = &body.as_array().unwrap()[0];
    assert!(member.get("username").is_some());
    assert!(member.get("password_hash").is_none());
}
