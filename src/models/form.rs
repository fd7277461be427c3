//! Text inputs of the create form.
use super::NewFlashcard;

/// The three inputs bound to the form: deck id, question and answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardForm {
    pub deck_id: String,
    pub question: String,
    pub answer: String,
}

impl FlashcardForm {
    /// Returns the trimmed values as a flashcard, or `None` if any of them is empty.
    /// The inputs are left untouched either way.
    pub fn to_flashcard(&self) -> Option<NewFlashcard> {
        let deck_id = self.deck_id.trim();
        let question = self.question.trim();
        let answer = self.answer.trim();

        if deck_id.is_empty() || question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(NewFlashcard {
            deck_id: deck_id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.deck_id.clear();
        self.question.clear();
        self.answer.clear();
    }
}
