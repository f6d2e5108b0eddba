mod app;
use collection_app::*;

use app::CollectionApp;
use database::db::{connect, count_decks, deck_collection, insert_deck, load_all_decks};

fn main() -> eframe::Result<()> {
    let database = connect().expect("Failed to connect to MongoDB");
    let decks = deck_collection(&database);

    if count_decks(&decks).unwrap_or(0) == 0 {
        let mut starter = Deck {
            id: String::new(),
            name: Some("Aggro Red".to_string()),
            cards: Some(vec![
                DeckEntry {
                    card_name: "Lightning Bolt".to_string(),
                    quantity: 4,
                },
                DeckEntry {
                    card_name: "Goblin Guide".to_string(),
                    quantity: 4,
                },
                DeckEntry {
                    card_name: "Mountain".to_string(),
                    quantity: 20,
                },
            ]),
        };
        let _ = insert_deck(&mut starter, &decks);

        println!("Sample deck created!");
    }

    let library = load_all_decks(&decks).expect("Failed to load decks from database");

    println!("Loaded {} decks from database", library.decks.len());
    for deck in &library.decks {
        println!(
            "  - {} ({} entries)",
            deck.name.as_deref().unwrap_or("(unnamed)"),
            deck.cards.as_ref().map_or(0, Vec::len)
        );
    }
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MTG Collection",
        options,
        Box::new(|_cc| Ok(Box::new(CollectionApp::new_with_library(library, decks)))),
    )
}
