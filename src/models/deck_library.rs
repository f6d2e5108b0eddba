//! Container for all decks loaded from the store
use super::Deck;

#[derive(Clone)]
pub struct DeckLibrary {
    pub decks: Vec<Deck>,
}

impl Default for DeckLibrary {
    fn default() -> Self {
        Self { decks: Vec::new() }
    }
}
