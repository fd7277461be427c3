pub mod flashcard;
pub mod form;

pub use flashcard::{CardItem, FlashcardEdit, ListedFlashcard, NewFlashcard};
pub use form::FlashcardForm;
