//! reqwest implementation of [`FlashcardApi`].

use super::FlashcardApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{FlashcardEdit, ListedFlashcard, NewFlashcard};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

const FLASHCARDS_PATH: &str = "api/flashcards";

/// Talks to a flashcards server over HTTP. No timeout is set; requests run
/// until the transport gives up.
pub struct HttpFlashcardApi {
    client: Client,
    base_url: String,
}

impl HttpFlashcardApi {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "{} (URL must start with http:// or https://)",
                base_url
            )));
        }

        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn card_url(&self, id: i64) -> String {
        self.url(&format!("{}/{}", FLASHCARDS_PATH, id))
    }
}

/// Fails on a non-2xx status, otherwise returns the body text.
async fn read_body(response: Response) -> ApiResult<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response.text().await?)
}

#[async_trait]
impl FlashcardApi for HttpFlashcardApi {
    async fn create(&self, card: &NewFlashcard) -> ApiResult<Value> {
        log::debug!("POST {} for deck '{}'", FLASHCARDS_PATH, card.deck_id);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.url(FLASHCARDS_PATH))
            .json(card)
            .send()
            .await?;

        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list(&self) -> ApiResult<Vec<ListedFlashcard>> {
        log::debug!("GET {}", FLASHCARDS_PATH);

        let response = self.client.get(self.url(FLASHCARDS_PATH)).send().await?;
        let body = read_body(response).await?;

        let value: Value = serde_json::from_str(&body)?;
        let entries = value.as_array().ok_or_else(|| {
            ApiError::UnexpectedShape(format!("expected a JSON array, got {}", value))
        })?;

        Ok(entries.iter().map(ListedFlashcard::from_value).collect())
    }

    async fn update(&self, id: i64, edit: &FlashcardEdit) -> ApiResult<()> {
        log::debug!("PUT {}/{}", FLASHCARDS_PATH, id);

        let response = self.client.put(self.card_url(id)).json(edit).send().await?;
        read_body(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        log::debug!("DELETE {}/{}", FLASHCARDS_PATH, id);

        let response = self.client.delete(self.card_url(id)).send().await?;
        read_body(response).await?;
        Ok(())
    }
}
