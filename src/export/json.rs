//! JSON import/export module for decks.
//! Provides functionality to save and load Deck structures to/from JSON files.

use crate::models::Deck;
use chrono::Local;
use std::fs::File;
use std::io::{Read, Write};

/// Suggested file name for exporting a deck, stamped with today's date.
pub fn default_export_file_name(deck: &Deck) -> String {
    let name = deck.name.as_deref().unwrap_or("deck");
    format!("{}-{}.json", name, Local::now().format("%Y-%m-%d"))
}

/// Exports a deck to a JSON file at the specified path.
/// The JSON uses the same field names as the stored document, so unset
/// optional fields stay absent from the file.
pub fn export_json_to_path(deck: &Deck, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a deck from a JSON file.
/// Prints the deck name upon successful import.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(filename: &str) -> Result<Deck, Box<dyn std::error::Error>> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    // Deserialize JSON string into Deck structure
    let deck: Deck = serde_json::from_str(&contents)?;

    println!(
        "Deck '{}' imported from '{}'",
        deck.name.as_deref().unwrap_or("(unnamed)"),
        filename
    );
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeckEntry;
    use std::fs;

    fn create_test_deck() -> Deck {
        Deck {
            id: "d1".to_string(),
            name: Some("Test Deck".to_string()),
            cards: Some(vec![
                DeckEntry {
                    card_name: "Lightning Bolt".to_string(),
                    quantity: 4,
                },
                DeckEntry {
                    card_name: "Goblin Guide".to_string(),
                    quantity: 4,
                },
            ]),
        }
    }

    #[test]
    fn test_export_json_to_path() {
        let deck = create_test_deck();
        let test_file = "test_export.json";

        let result = export_json_to_path(&deck, test_file);
        assert!(result.is_ok());

        assert!(fs::metadata(test_file).is_ok(), "File should exist");

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "_id": "abc123",
  "Name": "Import Test Deck",
  "Cards": [
    {
      "CardName": "Giant Growth",
      "Quantity": 4
    }
  ]
}"#;

        let test_file = "test_import.json";
        fs::write(test_file, json_content).unwrap();

        let result = import_json(test_file);
        assert!(result.is_ok());

        let deck = result.unwrap();
        assert_eq!(deck.id, "abc123");
        assert_eq!(deck.name.as_deref(), Some("Import Test Deck"));
        let cards = deck.cards.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_name, "Giant Growth");
        assert_eq!(cards[0].quantity, 4);

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let original_deck = create_test_deck();
        let test_file = "test_roundtrip.json";

        let export_result = export_json_to_path(&original_deck, test_file);
        assert!(export_result.is_ok());

        let import_result = import_json(test_file);
        assert!(import_result.is_ok());

        let imported_deck = import_result.unwrap();
        assert_eq!(original_deck, imported_deck);

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_unset_fields_stay_absent_in_file() {
        let deck = Deck {
            id: "d9".to_string(),
            name: None,
            cards: None,
        };
        let test_file = "test_unset_fields.json";

        export_json_to_path(&deck, test_file).unwrap();

        let contents = fs::read_to_string(test_file).unwrap();
        assert!(contents.contains("\"_id\""));
        assert!(!contents.contains("\"Name\""));
        assert!(!contents.contains("\"Cards\""));

        let imported = import_json(test_file).unwrap();
        assert!(imported.name.is_none());
        assert!(imported.cards.is_none());

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_default_export_file_name() {
        let deck = create_test_deck();
        let file_name = default_export_file_name(&deck);

        assert!(file_name.starts_with("Test Deck-"));
        assert!(file_name.ends_with(".json"));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json("nonexistent_file_xyz123.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_import_invalid_json() {
        let test_file = "test_invalid.json";
        fs::write(test_file, "{ this is not valid json }").unwrap();

        let result = import_json(test_file);
        assert!(result.is_err());

        let _ = fs::remove_file(test_file);
    }
}
