//! Deck is a named, ordered collection of card entries stored as one document
use super::DeckEntry;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Surrogate key. Empty until the persistence layer assigns one at
    /// insertion time; never regenerated afterwards.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` means the card list was never loaded or set; `Some(vec![])`
    /// means the deck is known to contain zero cards. Entry order is deck
    /// composition order.
    #[serde(rename = "Cards", default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<DeckEntry>>,
}

impl Deck {
    /// Creates a deck that already carries a freshly generated id,
    /// with `name` and `cards` left unset.
    pub fn with_generated_id() -> Self {
        Self {
            id: generate_deck_id(),
            ..Self::default()
        }
    }
}

/// Generates a new string surrogate key (an ObjectId rendered as hex).
pub fn generate_deck_id() -> String {
    ObjectId::new().to_hex()
}
