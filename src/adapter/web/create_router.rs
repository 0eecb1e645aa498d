use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::route::{health, seed, users};

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(health::get))
        .route("/users", get(users::get_all).post(users::post))
        .route(
            "/users/:id",
            get(users::get).put(users::put).delete(users::delete),
        )
        .route("/seed", get(seed::get));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::memory::user::InMemoryUserRepository;
    use crate::core::domain::command::CommandError;
    use crate::core::domain::entity::user::{NewUser, User, UserCommand, UserQuery};
    use crate::core::domain::query::QueryError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn seeded_router() -> Router {
        let repository = Arc::new(InMemoryUserRepository::with_users(vec![
            NewUser::new("Willy", "willy@dev.com"),
            NewUser::new("Ana", "ana@dev.com"),
        ]));
        create_router(Arc::new(AppState::new(repository.clone(), repository)))
    }

    /// A store whose every call fails as if the database were unreachable.
    struct UnreachableStore;

    #[async_trait]
    impl UserCommand for UnreachableStore {
        async fn insert(&self, _user: NewUser) -> Result<User, CommandError> {
            Err(CommandError::DatabaseError("connection refused".to_string()))
        }

        async fn update(&self, _id: i32, _user: NewUser) -> Result<User, CommandError> {
            Err(CommandError::DatabaseError("connection refused".to_string()))
        }

        async fn delete(&self, _id: i32) -> Result<User, CommandError> {
            Err(CommandError::DatabaseError("connection refused".to_string()))
        }

        async fn insert_missing(&self, _users: Vec<NewUser>) -> Result<Vec<User>, CommandError> {
            Err(CommandError::DatabaseError("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl UserQuery for UnreachableStore {
        async fn find_all(&self) -> Result<Vec<User>, QueryError> {
            Err(QueryError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: i32) -> Result<User, QueryError> {
            Err(QueryError::DatabaseError("connection refused".to_string()))
        }
    }

    fn unreachable_router() -> Router {
        let store = Arc::new(UnreachableStore);
        create_router(Arc::new(AppState::new(store.clone(), store)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(body) => request
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String, Value) {
        let request = Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = seeded_router();

        let (status, body) = send(&app, "GET", "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let app = seeded_router();

        let (status, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Willy", "email": "willy@dev.com"},
                {"id": 2, "name": "Ana", "email": "ana@dev.com"}
            ])
        );

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({"name": "Rodri", "email": "rodri@gmail.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 3, "name": "Rodri", "email": "rodri@gmail.com"}));

        let (status, body) = send(&app, "GET", "/api/users/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Rodri");

        let (status, body) = send(
            &app,
            "PUT",
            "/api/users/3",
            Some(json!({"name": "Rodrigo", "email": "rodri@gmail.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 3, "name": "Rodrigo", "email": "rodri@gmail.com"}));

        let (status, body) = send(&app, "DELETE", "/api/users/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], 3);
        assert!(body["message"].is_string());

        let (_, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .all(|user| user["id"] != 3));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_adding_a_record() {
        let app = seeded_router();

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({"name": "Willy Two", "email": "willy@dev.com"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
        let (_, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn missing_ids_fail_and_leave_users_untouched() {
        let app = seeded_router();
        let (_, before) = send(&app, "GET", "/api/users", None).await;

        let (update_status, update_body) = send(
            &app,
            "PUT",
            "/api/users/42",
            Some(json!({"name": "Ghost", "email": "ghost@dev.com"})),
        )
        .await;
        let (delete_status, delete_body) = send(&app, "DELETE", "/api/users/42", None).await;

        assert_eq!(update_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(update_body["error"].is_string());
        assert!(update_body.get("erorr").is_none());
        assert_eq!(delete_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(delete_body["error"].is_string());
        let (_, after) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn non_numeric_id_is_treated_as_not_found() {
        let app = seeded_router();

        let (get_status, _) = send(&app, "GET", "/api/users/abc", None).await;
        let (delete_status, body) = send(&app, "DELETE", "/api/users/abc", None).await;

        assert_eq!(get_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(delete_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn blank_fields_are_a_bad_request() {
        let app = seeded_router();

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({"name": "", "email": "blank@dev.com"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let app = create_router(Arc::new(AppState::new(repository.clone(), repository)));

        let (status, body) = send(&app, "GET", "/api/seed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["users"].as_array().map(Vec::len), Some(2));

        let (status, body) = send(&app, "GET", "/api/seed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["users"], json!([]));

        let (_, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn undecodable_bodies_come_back_as_json_errors() {
        let app = seeded_router();

        let cases = [
            ("POST", "/api/users", r#"{"name":"X"}"#),
            ("PUT", "/api/users/1", r#"{"name":"X","email":5}"#),
            ("POST", "/api/users", r#"{"name":"#),
        ];
        for (method, uri, body) in cases {
            let (status, content_type, body) = send_raw(&app, method, uri, body).await;

            assert!(status.is_client_error(), "{method} {uri}: {status}");
            assert!(content_type.starts_with("application/json"));
            assert!(body["error"].is_string());
        }

        let (_, users) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(users.as_array().map(Vec::len), Some(2));
        assert_eq!(users[0]["name"], "Willy");
    }

    #[tokio::test]
    async fn health_is_ok_when_the_store_is_down() {
        let app = unreachable_router();

        let (status, body) = send(&app, "GET", "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn store_failures_are_internal_errors() {
        let app = unreachable_router();
        let user = json!({"name": "Rodri", "email": "rodri@gmail.com"});

        let responses = [
            send(&app, "GET", "/api/users", None).await,
            send(&app, "GET", "/api/users/1", None).await,
            send(&app, "POST", "/api/users", Some(user.clone())).await,
            send(&app, "PUT", "/api/users/1", Some(user)).await,
            send(&app, "DELETE", "/api/users/1", None).await,
            send(&app, "GET", "/api/seed", None).await,
        ];

        for (status, body) in responses {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body["error"].as_str().unwrap().contains("connection refused"));
        }
    }
}
