pub mod deck;
pub mod deck_entry;
pub mod deck_library;

pub use deck::Deck;
pub use deck_entry::DeckEntry;
pub use deck_library::DeckLibrary;
