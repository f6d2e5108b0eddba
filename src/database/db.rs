//! Database operations for the deck collection
//!
//! Wraps the synchronous MongoDB driver: connecting, inserting decks with
//! id write-back, loading, replacing and deleting deck documents.

use crate::models::deck::generate_deck_id;
use crate::models::{Deck, DeckLibrary};
use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::sync::{Client, Collection, Database};

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DATABASE_NAME: &str = "mtg_collection";
const DECKS_COLLECTION: &str = "decks";

/// Connects to MongoDB and returns a handle to the collection database.
///
/// The connection string is read from the `MONGODB_URI` environment variable
/// when set, otherwise a local default is used.
pub fn connect() -> Result<Database> {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
    let client = Client::with_uri_str(&uri)?;
    Ok(client.database(DATABASE_NAME))
}

/// The `decks` collection, mapped through the `Deck` document shape.
pub fn deck_collection(db: &Database) -> Collection<Deck> {
    db.collection::<Deck>(DECKS_COLLECTION)
}

/// Assigns a fresh id to a deck that still carries the empty sentinel.
///
/// Returns whether an id was assigned. An id already present is never
/// regenerated.
pub fn ensure_deck_id(deck: &mut Deck) -> bool {
    if deck.id.is_empty() {
        deck.id = generate_deck_id();
        true
    } else {
        false
    }
}

/// Inserts a deck, assigning an id first when none is set.
///
/// The generated id is written back into the in-memory deck, so the caller's
/// instance always matches the stored document. Returns the id the deck was
/// stored under.
pub fn insert_deck(deck: &mut Deck, decks: &Collection<Deck>) -> Result<String> {
    ensure_deck_id(deck);
    decks.insert_one(&*deck, None)?;
    Ok(deck.id.clone())
}

/// Retrieves a single deck by id.
pub fn get_deck(id: &str, decks: &Collection<Deck>) -> Result<Option<Deck>> {
    decks.find_one(doc! { "_id": id }, None)
}

/// Loads every deck in the collection into memory.
pub fn load_all_decks(decks: &Collection<Deck>) -> Result<DeckLibrary> {
    let mut library = DeckLibrary::default();
    for deck in decks.find(None, None)? {
        library.decks.push(deck?);
    }
    Ok(library)
}

/// Number of decks currently stored.
pub fn count_decks(decks: &Collection<Deck>) -> Result<u64> {
    decks.count_documents(None, None)
}

/// Replaces the stored document with the in-memory state of the deck.
pub fn update_deck(deck: &Deck, decks: &Collection<Deck>) -> Result<()> {
    decks.replace_one(doc! { "_id": deck.id.as_str() }, deck, None)?;
    Ok(())
}

/// Deletes a deck document by id.
pub fn delete_deck(id: &str, decks: &Collection<Deck>) -> Result<()> {
    decks.delete_one(doc! { "_id": id }, None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_deck_id_assigns_on_sentinel() {
        let mut deck = Deck::default();

        assert!(ensure_deck_id(&mut deck));
        assert_eq!(deck.id.len(), 24);
    }

    #[test]
    fn test_ensure_deck_id_keeps_existing_id() {
        let mut deck = Deck {
            id: "d1".to_string(),
            ..Deck::default()
        };

        assert!(!ensure_deck_id(&mut deck));
        assert_eq!(deck.id, "d1");
    }

    #[test]
    fn test_ensure_deck_id_assigns_distinct_ids() {
        let mut first = Deck::default();
        let mut second = Deck::default();

        ensure_deck_id(&mut first);
        ensure_deck_id(&mut second);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_sentinel_deck_document_has_only_generated_id() {
        let mut deck = Deck::default();
        ensure_deck_id(&mut deck);

        let doc = mongodb::bson::to_document(&deck).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), deck.id);
        assert_eq!(doc.len(), 1);

        let restored: Deck = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(restored.id, deck.id);
        assert!(restored.name.is_none());
        assert!(restored.cards.is_none());
    }
}
