//! DeckEntry is one card reference within a deck: which card, how many copies
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeckEntry {
    pub card_name: String,
    pub quantity: u32,
}
