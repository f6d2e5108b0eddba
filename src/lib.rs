pub mod database;
pub mod export;
pub mod models;

pub use models::{Deck, DeckEntry, DeckLibrary};
