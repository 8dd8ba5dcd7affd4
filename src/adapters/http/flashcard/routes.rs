//! Axum router configuration for flashcard endpoints.

use axum::{routing::get, Router};

use super::handlers::{insert_flashcards, list_flashcards, FlashcardAppState};

/// # Routes
/// - `POST /api/flashcards` - Save one card or a batch
/// - `GET /api/flashcards?user_id=` - List cards, optionally by owner
pub fn flashcard_router() -> Router<FlashcardAppState> {
    Router::new().route("/api/flashcards", get(list_flashcards).post(insert_flashcards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::supabase::{InMemoryTableStore, StoreFlashcardRepository, FLASHCARDS_TABLE};

    fn app(store: &InMemoryTableStore) -> Router {
        let repository = Arc::new(StoreFlashcardRepository::new(Arc::new(store.clone())));
        flashcard_router().with_state(FlashcardAppState::new(repository))
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/flashcards")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn accepts_a_single_row() {
        let store = InMemoryTableStore::new();

        let response = app(&store)
            .oneshot(post(json!({"question": "What is superposition?", "answer": "Both at once"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"][0]["question"], "What is superposition?");
    }

    #[tokio::test]
    async fn batch_drops_incomplete_rows() {
        let store = InMemoryTableStore::new();

        let response = app(&store)
            .oneshot(post(json!([
                {"question": "Q1", "answer": "A1"},
                {"question": "Q2"},
                {"question": "Q3", "answer": "A3", "created_by": "u1"}
            ])))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(store.rows(FLASHCARDS_TABLE).len(), 2);
    }

    #[tokio::test]
    async fn nothing_valid_is_bad_request() {
        let store = InMemoryTableStore::new();

        let response = app(&store)
            .oneshot(post(json!([{"question": "", "answer": ""}])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"ok": false, "error": "No valid rows to insert."})
        );
    }

    #[tokio::test]
    async fn missing_owner_column_still_saves() {
        let store = InMemoryTableStore::new()
            .with_table_columns(FLASHCARDS_TABLE, &["id", "question", "answer"]);

        let response = app(&store)
            .oneshot(post(json!({"question": "Q", "answer": "A", "created_by": "u1"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.insert_calls(FLASHCARDS_TABLE), 2);
    }

    #[tokio::test]
    async fn lists_by_owner() {
        let store = InMemoryTableStore::new();
        let app = app(&store);
        app.clone()
            .oneshot(post(json!([
                {"question": "Q1", "answer": "A1", "created_by": "u1"},
                {"question": "Q2", "answer": "A2", "created_by": "u2"}
            ])))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/flashcards?user_id=u2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["question"], "Q2");
    }
}
