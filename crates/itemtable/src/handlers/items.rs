//! Read and write handlers for the items table.
//!
//! `read_items` and `write_item` take an invocation record and always return
//! a well-formed envelope; no error escapes them. The axum handlers below
//! only translate between HTTP and that contract.

use axum::{body::Bytes, extract::State};

use itemtable_core::items::{
    parse_write_request, HandlerResponse, Invocation, PREFLIGHT_CORS, READ_CORS, WRITE_CORS,
};
use itemtable_core::storage::{ItemRepository, RepositoryError};

use crate::{handlers::ApiResponse, state::AppState};

/// Message returned after a successful write.
pub const ITEM_SAVED_MESSAGE: &str = "Item saved successfully";

// ============================================================================
// Read Handler
// ============================================================================

/// Returns every item in the table as a JSON array.
///
/// The invocation carries no input for reads. Any store or encoding failure
/// becomes a `500` with the error message.
pub async fn read_items(repo: &dyn ItemRepository, _invocation: &Invocation) -> HandlerResponse {
    match scan_to_json(repo).await {
        Ok(body) => HandlerResponse::new(200, &READ_CORS, body),
        Err(err) => {
            tracing::error!(error = %err, "Failed to read items");
            HandlerResponse::error(500, &READ_CORS, err.to_string())
        }
    }
}

async fn scan_to_json(repo: &dyn ItemRepository) -> Result<String, RepositoryError> {
    let items = repo.scan_items().await?;
    serde_json::to_string(&items).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

// ============================================================================
// Write Handler
// ============================================================================

/// Validates the invocation body and upserts one item.
///
/// Validation failures return `400` without touching the store. A store
/// failure returns `500`.
pub async fn write_item(repo: &dyn ItemRepository, invocation: &Invocation) -> HandlerResponse {
    let request = match parse_write_request(invocation.body.as_deref()) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected write request");
            return HandlerResponse::error(400, &WRITE_CORS, err.to_string());
        }
    };

    let item = request.into_item();
    match repo.put_item(&item).await {
        Ok(()) => {
            tracing::info!(item_id = %item.item_id, "Item saved");
            HandlerResponse::message(200, &WRITE_CORS, ITEM_SAVED_MESSAGE)
        }
        Err(err) => {
            tracing::error!(item_id = %item.item_id, error = %err, "Failed to save item");
            HandlerResponse::error(500, &WRITE_CORS, err.to_string())
        }
    }
}

// ============================================================================
// HTTP adapters
// ============================================================================

/// List all items (GET /items).
#[axum::debug_handler]
pub async fn list_items(State(state): State<AppState>) -> ApiResponse {
    ApiResponse(read_items(state.item_repo.as_ref(), &Invocation::default()).await)
}

/// Save one item (POST /items).
#[axum::debug_handler]
pub async fn save_item(State(state): State<AppState>, body: Bytes) -> ApiResponse {
    let invocation = match Invocation::from_raw_body(&body) {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected write request with non UTF-8 body");
            return ApiResponse(HandlerResponse::error(400, &WRITE_CORS, err.to_string()));
        }
    };
    ApiResponse(write_item(state.item_repo.as_ref(), &invocation).await)
}

/// CORS preflight (OPTIONS /items).
#[axum::debug_handler]
pub async fn preflight() -> ApiResponse {
    ApiResponse(HandlerResponse::new(200, &PREFLIGHT_CORS, "{}"))
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use itemtable_core::items::Item;
    use serde_json::{json, Value};

    use crate::storage::InMemoryRepository;

    /// Store that fails every call with the configured error.
    struct FailingRepository(RepositoryError);

    #[async_trait]
    impl ItemRepository for FailingRepository {
        async fn scan_items(&self) -> itemtable_core::storage::Result<Vec<Item>> {
            Err(self.0.clone())
        }

        async fn put_item(&self, _item: &Item) -> itemtable_core::storage::Result<()> {
            Err(self.0.clone())
        }
    }

    fn body_json(response: &HandlerResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    // ------------------------------------------------------------------------
    // read_items
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_read_empty_table() {
        let repo = InMemoryRepository::new();

        let response = read_items(&repo, &Invocation::default()).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(body_json(&response), json!([]));
        assert_eq!(response.header("Access-Control-Allow-Methods"), Some("GET,OPTIONS"));
    }

    #[tokio::test]
    async fn test_read_returns_every_item() {
        let repo = InMemoryRepository::with_items([
            Item::new("a", json!(3)),
            Item::new("b", json!(3.5)),
            Item::new("c", json!({"nested": [1, "two"]})),
        ]);

        let response = read_items(&repo, &Invocation::default()).await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0], json!({"ItemId": "a", "Data": 3}));
        assert_eq!(body[1], json!({"ItemId": "b", "Data": 3.5}));
    }

    #[tokio::test]
    async fn test_read_ignores_invocation_body() {
        let repo = InMemoryRepository::with_items([Item::new("a", json!(1))]);

        let response = read_items(&repo, &Invocation::with_body("garbage")).await;

        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn test_read_store_failure_is_500() {
        let repo = FailingRepository(RepositoryError::QueryFailed(
            "Throughput exceeded, please retry".to_string(),
        ));

        let response = read_items(&repo, &Invocation::default()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_json(&response),
            json!({"error": "Query failed: Throughput exceeded, please retry"})
        );
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    }

    // ------------------------------------------------------------------------
    // write_item
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_write_coerces_numeric_id() {
        let repo = InMemoryRepository::new();
        let invocation = Invocation::with_body(r#"{"ItemId": 42, "Data": {"x": 1}}"#);

        let response = write_item(&repo, &invocation).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body_json(&response),
            json!({"message": "Item saved successfully"})
        );
        let items = repo.scan_items().await.unwrap();
        assert_eq!(items, vec![Item::new("42", json!({"x": 1}))]);
    }

    #[tokio::test]
    async fn test_write_missing_body() {
        let repo = InMemoryRepository::new();

        let response = write_item(&repo, &Invocation::default()).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "Request body is missing"})
        );
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_write_invalid_json() {
        let repo = InMemoryRepository::new();

        let response = write_item(&repo, &Invocation::with_body("not json")).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(body_json(&response), json!({"error": "Invalid JSON format"}));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_write_missing_fields() {
        let repo = InMemoryRepository::new();

        let response = write_item(&repo, &Invocation::with_body(r#"{"ItemId": "a"}"#)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "Missing required fields (ItemId and Data)"})
        );
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let repo = FailingRepository(RepositoryError::ConnectionFailed("down".to_string()));

        let response = write_item(&repo, &Invocation::with_body("{")).await;

        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn test_write_store_failure_is_500() {
        let repo = FailingRepository(RepositoryError::ConnectionFailed(
            "dispatch failure".to_string(),
        ));
        let invocation = Invocation::with_body(r#"{"ItemId": "a", "Data": 1}"#);

        let response = write_item(&repo, &invocation).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_json(&response),
            json!({"error": "Connection failed: dispatch failure"})
        );
        assert_eq!(response.header("Access-Control-Allow-Methods"), Some("POST,OPTIONS"));
    }

    #[tokio::test]
    async fn test_second_write_wins() {
        let repo = InMemoryRepository::new();

        write_item(&repo, &Invocation::with_body(r#"{"ItemId": "k", "Data": "old"}"#)).await;
        write_item(&repo, &Invocation::with_body(r#"{"ItemId": "k", "Data": "new"}"#)).await;

        let response = read_items(&repo, &Invocation::default()).await;
        assert_eq!(body_json(&response), json!([{"ItemId": "k", "Data": "new"}]));
    }

    #[tokio::test]
    async fn test_every_response_allows_any_origin() {
        let repo = InMemoryRepository::new();
        let responses = [
            read_items(&repo, &Invocation::default()).await,
            write_item(&repo, &Invocation::default()).await,
            write_item(&repo, &Invocation::with_body("[")).await,
            write_item(&repo, &Invocation::with_body(r#"{"ItemId": "", "Data": 1}"#)).await,
            write_item(&repo, &Invocation::with_body(r#"{"ItemId": 1, "Data": 1}"#)).await,
        ];

        let statuses: Vec<u16> = responses.iter().map(|r| r.status_code).collect();
        assert_eq!(statuses, vec![200, 400, 400, 500, 200]);
        for response in &responses {
            assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        }
    }
}
