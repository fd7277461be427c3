//! Rendering surface for flashcard items.
use crate::models::CardItem;

/// Where rendered flashcards go. Items are only ever appended.
pub trait CardList {
    fn append(&mut self, item: CardItem);
}

/// In-memory list drawn by the egui app.
#[derive(Debug, Clone, Default)]
pub struct RenderedList {
    items: Vec<CardItem>,
}

impl RenderedList {
    pub fn items(&self) -> &[CardItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CardList for RenderedList {
    fn append(&mut self, item: CardItem) {
        self.items.push(item);
    }
}
