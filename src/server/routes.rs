use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;

use super::AppState;
use crate::translation::{TranslateError, UserReview, translate_review};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/translate", post(translate))
        .route("/translateReview", post(translate_review_handler))
        .with_state(state)
}

/// A translation failure, rendered as `502 Bad Gateway`.
struct UpstreamError(TranslateError);

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "translation failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<TranslateError> for UpstreamError {
    fn from(err: TranslateError) -> Self {
        Self(err)
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<String, UpstreamError> {
    Ok(state.client.translate_text(&body, &state.languages).await?)
}

async fn translate_review_handler(
    State(state): State<Arc<AppState>>,
    Json(review): Json<UserReview>,
) -> Result<Json<UserReview>, UpstreamError> {
    let review = translate_review(&state.client, review, &state.languages).await?;
    Ok(Json(review))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{LanguagePair, TranslationClient};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn router_with_stub(status: u16, body: &str) -> (Router, MockServer) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "hello"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;

        let state = AppState::new(TranslationClient::new(server.uri()), LanguagePair::default());
        (create_router(state), server)
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _server) = router_with_stub(200, "").await;

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_translate_route() {
        let (router, _server) = router_with_stub(200, r#"[["hola","hello",null,null]]"#).await;

        let response = router
            .oneshot(
                Request::post("/translate")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "hola");
    }

    #[tokio::test]
    async fn test_translate_review_route() {
        let (router, _server) = router_with_stub(200, r#"[["hola","hello",null,null]]"#).await;
        let review = json!({ "comment": "hello", "rating": 5, "author": "sam" });

        let response = router
            .oneshot(
                Request::post("/translateReview")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(review.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value, json!({ "comment": "hola", "rating": 5, "author": "sam" }));
    }

    #[tokio::test]
    async fn test_translate_route_upstream_failure() {
        let (router, _server) = router_with_stub(500, "oops").await;

        let response = router
            .oneshot(Request::post("/translate").body(Body::from("hello")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(value["error"].as_str().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_translate_review_route_malformed_upstream() {
        let (router, _server) = router_with_stub(200, "no commas here").await;

        let response = router
            .oneshot(
                Request::post("/translateReview")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"comment":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_translate_review_route_rejects_missing_comment() {
        let (router, _server) = router_with_stub(200, r#"[["hola","hello"]]"#).await;

        let response = router
            .oneshot(
                Request::post("/translateReview")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"rating":3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
