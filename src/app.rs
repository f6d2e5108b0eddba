//! Main application UI and state management.
//! Handles the deck collection interface, card entry editing, and
//! JSON import/export of decks.

use collection_app::database::db;
use collection_app::export::json::{default_export_file_name, export_json_to_path, import_json};
use collection_app::models::{Deck, DeckEntry, DeckLibrary};
use eframe::egui;
use mongodb::sync::Collection;

/// Main application state
#[derive(Default)]
pub struct CollectionApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    library: DeckLibrary,
    selected_deck_index: Option<usize>,
    current_card_name: String,
    current_quantity: u32,
    new_deck_name: String,
    decks: Option<Collection<Deck>>,

    show_export_dialog: bool,
    show_import_result_dialog: bool,
    import_result_message: String,
}

/// Display label for a deck that may not have a name set
fn deck_display_name(deck: &Deck) -> &str {
    deck.name.as_deref().unwrap_or("(unnamed)")
}

/// Total number of card copies in a deck; an unset card list counts as zero
fn card_count(deck: &Deck) -> u32 {
    deck.cards
        .as_ref()
        .map_or(0, |cards| cards.iter().map(|entry| entry.quantity).sum())
}

impl eframe::App for CollectionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_main_screen(ctx);

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) {
            if self.allowed_to_close {
                // Allow close
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_confirmation_dialog = true;
            }
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }
        // exporting a deck
        if self.show_export_dialog {
            let mut export_deck_index: Option<usize> = None;
            let mut should_cancel = false;

            egui::Window::new("Export Deck")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Select a deck to export:");
                    ui.separator();

                    for (i, deck) in self.library.decks.iter().enumerate() {
                        if ui
                            .button(format!(
                                "{} ({} cards)",
                                deck_display_name(deck),
                                card_count(deck)
                            ))
                            .clicked()
                        {
                            export_deck_index = Some(i);
                        }
                    }

                    ui.separator();

                    if ui.button("Cancel").clicked() {
                        should_cancel = true;
                    }
                });

            if let Some(i) = export_deck_index {
                self.handle_export(i);
            }
            if should_cancel {
                self.show_export_dialog = false;
            }
        }

        if self.show_import_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.import_result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_import_result_dialog = false;
                    }
                });
        }
    }
}

impl CollectionApp {
    /// Creates a new application instance with decks loaded from the database
    pub fn new_with_library(library: DeckLibrary, decks: Collection<Deck>) -> Self {
        let has_decks = !library.decks.is_empty();
        Self {
            library,
            selected_deck_index: if has_decks { Some(0) } else { None },
            current_card_name: String::new(),
            current_quantity: 1,
            new_deck_name: String::new(),
            show_confirmation_dialog: false,
            allowed_to_close: false,
            decks: Some(decks),
            show_export_dialog: false,
            show_import_result_dialog: false,
            import_result_message: String::new(),
        }
    }

    /// Renders the main screen with the deck management interface
    fn render_main_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("MTG Deck Collection");

        ui.separator();

        // Import/Export buttons
        ui.horizontal(|ui| {
            if ui.button("Export Deck").clicked() {
                self.show_export_dialog = true;
            }
            if ui.button("Import Deck").clicked() {
                self.handle_import();
            }
        });

        ui.separator();

        // Deck creation section
        ui.heading("Create New Deck");
        ui.horizontal(|ui| {
            ui.label("Deck name:");
            ui.text_edit_singleline(&mut self.new_deck_name);
            if ui.button("Create Deck").clicked() {
                if !self.new_deck_name.is_empty() {
                    let mut deck = Deck::with_generated_id();
                    deck.name = Some(self.new_deck_name.clone());

                    // Save to database
                    if let Some(decks) = &self.decks {
                        let _ = db::insert_deck(&mut deck, decks);
                    }

                    self.library.decks.push(deck);
                    self.new_deck_name.clear();
                }
            }
        });

        ui.separator();

        ui.heading(format!("Decks ({})", self.library.decks.len()));

        // We store actions to execute after UI rendering to avoid borrowing conflicts
        let mut action_select: Option<usize> = None;
        let mut action_delete: Option<usize> = None;

        egui::ScrollArea::vertical()
            .id_source("decks_list")
            .max_height(150.0)
            .show(ui, |ui| {
                for (i, deck) in self.library.decks.iter().enumerate() {
                    let is_selected = self.selected_deck_index == Some(i);

                    ui.horizontal(|ui| {
                        if ui.selectable_label(
                            is_selected,
                            format!("{}. {} ({} cards)", i + 1, deck_display_name(deck), card_count(deck))
                        ).clicked() {
                            action_select = Some(i);
                        }

                        if ui.button("Delete").clicked() {
                            action_delete = Some(i);
                        }
                    });
                }
            });

        // Execute deferred actions
        if let Some(i) = action_select {
            self.selected_deck_index = Some(i);
        }
        if let Some(i) = action_delete {
            self.delete_deck(i);
        }

        ui.separator();

        // Card entry management for selected deck
        if let Some(deck_index) = self.selected_deck_index {
            if let Some(current_deck) = self.library.decks.get_mut(deck_index) {
                ui.heading(format!("Selected Deck: {}", deck_display_name(current_deck)));

                ui.horizontal(|ui| {
                    ui.label("Card name:");
                    ui.text_edit_singleline(&mut self.current_card_name);
                });

                ui.horizontal(|ui| {
                    ui.label("Copies:");
                    ui.add(egui::DragValue::new(&mut self.current_quantity).range(1..=99));
                });
                if ui.button("Add Card").clicked() {
                    if !self.current_card_name.is_empty() {
                        // First append on a deck without a card list initializes it
                        current_deck.cards.get_or_insert_with(Vec::new).push(DeckEntry {
                            card_name: self.current_card_name.clone(),
                            quantity: self.current_quantity,
                        });
                        // Save to database
                        if let Some(decks) = &self.decks {
                            let _ = db::update_deck(current_deck, decks);
                        }
                        self.current_card_name.clear();
                        self.current_quantity = 1;
                    }
                }

                ui.separator();

                ui.heading(format!("Cards ({})", card_count(current_deck)));

                egui::ScrollArea::vertical()
                    .id_source("cards_list")
                    .max_height(200.0)
                    .show(ui, |ui| {
                        if let Some(cards) = &current_deck.cards {
                            for entry in cards {
                                ui.label(format!("{}x {}", entry.quantity, entry.card_name));
                            }
                        } else {
                            ui.label("(card list not set)");
                        }
                    });
            }
        } else {
            ui.label("Select a deck to add cards");
        }
    });
    }

    /// Deletes a deck from the database and the in-memory library
    fn delete_deck(&mut self, deck_index: usize) {
        if deck_index >= self.library.decks.len() {
            return;
        }
        let removed = self.library.decks.remove(deck_index);

        if let Some(decks) = &self.decks {
            let _ = db::delete_deck(&removed.id, decks);
        }

        match self.selected_deck_index {
            Some(selected) if selected == deck_index => self.selected_deck_index = None,
            Some(selected) if selected > deck_index => {
                self.selected_deck_index = Some(selected - 1);
            }
            _ => {}
        }
    }

    /// Handles deck export to JSON file
    fn handle_export(&mut self, deck_index: usize) {
        if let Some(deck) = self.library.decks.get(deck_index) {
            // Open file save dialog
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(default_export_file_name(deck))
                .add_filter("JSON files", &["json"])
                .save_file()
            {
                match export_json_to_path(deck, path.to_str().unwrap()) {
                    Ok(_) => {
                        self.import_result_message =
                            format!("Deck '{}' exported successfully!", deck_display_name(deck));
                        self.show_import_result_dialog = true;
                    }
                    Err(e) => {
                        self.import_result_message = format!("Export failed: {}", e);
                        self.show_import_result_dialog = true;
                    }
                }
            }
        }
        self.show_export_dialog = false;
    }

    /// Handles deck import from JSON file
    fn handle_import(&mut self) {
        // Open file selection dialog
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            match import_json(path.to_str().unwrap()) {
                Ok(mut deck) => {
                    // Check if this deck document is already loaded
                    if !deck.id.is_empty() && self.library.decks.iter().any(|d| d.id == deck.id) {
                        self.import_result_message = format!(
                            "Deck '{}' is already in the collection!",
                            deck_display_name(&deck)
                        );
                        self.show_import_result_dialog = true;
                        return;
                    }

                    // Add deck to database; a deck exported before it was ever
                    // saved gets its id assigned here
                    if let Some(decks) = &self.decks {
                        if let Err(e) = db::insert_deck(&mut deck, decks) {
                            self.import_result_message = format!("Failed to save deck: {}", e);
                            self.show_import_result_dialog = true;
                            return;
                        }
                    }

                    self.import_result_message = format!(
                        "Deck '{}' imported successfully with {} cards!",
                        deck_display_name(&deck),
                        card_count(&deck)
                    );
                    self.show_import_result_dialog = true;

                    // Add to in-memory library
                    self.library.decks.push(deck);
                }
                Err(e) => {
                    self.import_result_message = format!(
                        "Import failed: {}\n\nPlease check if the file has correct structure:\n{{\n  \"_id\": \"...\",\n  \"Name\": \"Deck Name\",\n  \"Cards\": [...]\n}}",
                        e
                    );
                    self.show_import_result_dialog = true;
                }
            }
        }
    }
}
