//! Continuations run on the UI thread when a request finishes.
//!
//! Failures end here: they are logged and never reach the user or the list.

use super::CardList;
use crate::error::ApiResult;
use crate::models::ListedFlashcard;
use serde_json::Value;

/// Logs the server's answer to a create request. The optimistic item stays
/// in the list whatever the outcome.
pub fn on_created(result: ApiResult<Value>) {
    match result {
        Ok(response) => log::info!("Flashcard saved: {}", response),
        Err(e) => log::error!("Failed to save flashcard: {}", e),
    }
}

/// Appends the loaded flashcards in server order, or logs the failure.
/// Returns the number of items appended.
pub fn on_loaded<L: CardList + ?Sized>(
    list: &mut L,
    result: ApiResult<Vec<ListedFlashcard>>,
) -> usize {
    match result {
        Ok(cards) => {
            let count = cards.len();
            for card in cards {
                list.append(card.into());
            }
            log::info!("Loaded {} flashcards", count);
            count
        }
        Err(e) => {
            log::error!("Failed to load flashcards: {}", e);
            0
        }
    }
}
