//! Client side of the flashcards HTTP API.

pub mod http;

use crate::error::ApiResult;
use crate::models::{FlashcardEdit, ListedFlashcard, NewFlashcard};
use async_trait::async_trait;
use serde_json::Value;

pub use http::HttpFlashcardApi;

/// Operations offered by the server at `/api/flashcards`.
#[async_trait]
pub trait FlashcardApi: Send + Sync {
    /// `POST /api/flashcards`. Returns the response body parsed as JSON.
    async fn create(&self, card: &NewFlashcard) -> ApiResult<Value>;

    /// `GET /api/flashcards`, entries in the order the server sent them.
    async fn list(&self) -> ApiResult<Vec<ListedFlashcard>>;

    /// `PUT /api/flashcards/{id}`
    async fn update(&self, id: i64, edit: &FlashcardEdit) -> ApiResult<()>;

    /// `DELETE /api/flashcards/{id}`
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
