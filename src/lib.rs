pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod widget;

pub use api::{FlashcardApi, HttpFlashcardApi};
pub use error::{ApiError, ApiResult};
pub use models::{CardItem, FlashcardEdit, FlashcardForm, ListedFlashcard, NewFlashcard};
pub use widget::{CardList, FlashcardWidget, RenderedList};
