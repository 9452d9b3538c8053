use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{
        counter::increment_counter, health_check, sign::sign_hmac_sha512, users::create_user,
    },
    middleware::apply_middleware,
    state::AppState,
};

/// Create the Axum router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/redis/incr", post(increment_counter))
        .route("/sign/hmacsha512", post(sign_hmac_sha512))
        .route("/postgres/users", post(create_user))
        .with_state(state);

    apply_middleware(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::testing::default_state;

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = create_router(default_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn endpoints_only_accept_post() {
        for uri in ["/redis/incr", "/sign/hmacsha512", "/postgres/users"] {
            let response = create_router(default_state())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = create_router(default_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/redis/decr")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn json_body_without_content_type_is_accepted() {
        let cases = [
            ("/redis/incr", r#"{"key":"age","value":10}"#, json!({ "value": 10 })),
            ("/postgres/users", r#"{"name":"Alex","age":10}"#, json!({ "id": 1 })),
        ];

        for (uri, payload, expected) in cases {
            let response = create_router(default_state())
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .body(Body::from(payload))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
            let body = to_bytes(response.into_body(), 1024).await.unwrap();
            let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(value, expected, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn malformed_body_without_content_type_is_bad_request() {
        let response = create_router(default_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/sign/hmacsha512")
                    .body(Body::from("key=k&text=t"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
