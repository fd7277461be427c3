//! Main window: the create form above the list of flashcards.

use eframe::egui;
use flashcard_widget::{FlashcardWidget, RenderedList};
use tokio::runtime::Runtime;

pub struct FlashcardsApp {
    widget: FlashcardWidget<RenderedList>,
    // request tasks run here; dropped with the window
    _runtime: Runtime,
}

/// True when the user pressed Enter inside the given text field.
fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

impl FlashcardsApp {
    pub fn new(widget: FlashcardWidget<RenderedList>, runtime: Runtime) -> Self {
        Self {
            widget,
            _runtime: runtime,
        }
    }
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished requests are applied here, on the UI thread
        self.widget.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Create Flashcard");

            let mut submitted = false;
            let form = &mut self.widget.form;

            ui.horizontal(|ui| {
                ui.label("Deck ID:");
                let response = ui.text_edit_singleline(&mut form.deck_id);
                submitted |= submitted_with_enter(ui, &response);
            });

            ui.horizontal(|ui| {
                ui.label("Question:");
                let response = ui.text_edit_singleline(&mut form.question);
                submitted |= submitted_with_enter(ui, &response);
            });

            ui.horizontal(|ui| {
                ui.label("Answer:");
                let response = ui.text_edit_singleline(&mut form.answer);
                submitted |= submitted_with_enter(ui, &response);
            });

            if ui.button("Add Flashcard").clicked() {
                submitted = true;
            }

            if submitted {
                self.widget.submit();
            }

            ui.separator();

            let list = self.widget.list();
            ui.heading(format!("Flashcards ({})", list.len()));

            egui::ScrollArea::vertical()
                .id_salt("flashcards_list")
                .show(ui, |ui| {
                    for item in list.items() {
                        ui.group(|ui| {
                            ui.set_min_width(ui.available_width());
                            ui.label(egui::RichText::new(&item.question).strong());
                            ui.label(&item.answer);
                        });
                    }
                });
        });
    }
}
