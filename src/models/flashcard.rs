//! Flashcard payloads exchanged with the API and the item shown in the list.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/flashcards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlashcard {
    pub deck_id: String,
    pub question: String,
    pub answer: String,
}

/// Body of `PUT /api/flashcards/{id}`. The server keeps the stored deck id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardEdit {
    pub question: String,
    pub answer: String,
}

/// One entry of the `GET /api/flashcards` array.
///
/// The list endpoint is read with capitalized `Question`/`Answer` keys while
/// the create payload is written with `question`/`answer`. Both casings are
/// kept as the server contract states them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListedFlashcard {
    pub question: String,
    pub answer: String,
}

impl ListedFlashcard {
    /// Reads an array element without a schema check: missing or null fields
    /// become empty strings, non-string values are shown as JSON text.
    pub fn from_value(value: &Value) -> Self {
        Self {
            question: field_text(value, "Question"),
            answer: field_text(value, "Answer"),
        }
    }
}

fn field_text(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// A rendered list item: question and answer, never the deck id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub question: String,
    pub answer: String,
}

impl From<&NewFlashcard> for CardItem {
    fn from(card: &NewFlashcard) -> Self {
        Self {
            question: card.question.clone(),
            answer: card.answer.clone(),
        }
    }
}

impl From<ListedFlashcard> for CardItem {
    fn from(card: ListedFlashcard) -> Self {
        Self {
            question: card.question,
            answer: card.answer,
        }
    }
}
