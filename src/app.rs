use eframe::egui::{self, Key, Margin, Ui};

use crate::{dictionary::Dictionary, events::LookupState, ui::setup_custom_style};

const ENTRY_PROMPT: &str = "Enter a word:";
const EMPTY_DICTIONARY_NOTICE: &str = "No words loaded, check the console for details.";
const SEARCH_BUTTON_WIDTH: f32 = 80.0;
const RESULT_WRAP_WIDTH: f32 = 400.0;
const TEXT_EDIT_MARGIN: i8 = 4;
const SECTION_SPACING: f32 = 10.0;

pub struct DictionaryApp {
    dictionary: Dictionary,
    state: LookupState,
}

impl DictionaryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dictionary: Dictionary) -> Self {
        setup_custom_style(&cc.egui_ctx);
        Self {
            dictionary,
            state: LookupState::default(),
        }
    }

    fn show_search_bar(&mut self, ui: &mut Ui) {
        let mut search = false;

        ui.horizontal(|ui| {
            ui.label(ENTRY_PROMPT);

            let entry = ui.add(
                egui::TextEdit::singleline(&mut self.state.entry)
                    .desired_width(ui.available_width() - SEARCH_BUTTON_WIDTH)
                    .margin(Margin::same(TEXT_EDIT_MARGIN)),
            );

            if self.state.focus_entry {
                entry.request_focus();
                self.state.focus_entry = false;
            }

            if entry.changed() {
                self.state.text_changed(&self.dictionary);
            }

            // Enter drops focus from a single-line edit in the same frame it is pressed.
            if entry.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                search = true;
                self.state.focus_entry = true;
            }

            if ui.button("Search").clicked() {
                search = true;
            }
        });

        if search {
            self.state.search(&self.dictionary);
        }
    }

    fn show_result(&self, ui: &mut Ui) {
        ui.scope(|ui| {
            ui.set_max_width(RESULT_WRAP_WIDTH);
            ui.add(egui::Label::new(self.state.result.as_str()).wrap());
        });

        if self.dictionary.is_empty() {
            ui.add_space(SECTION_SPACING);
            ui.weak(EMPTY_DICTIONARY_NOTICE);
        }
    }

    fn show_suggestions(&mut self, ui: &mut Ui) {
        let mut picked: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for word in &self.state.suggestions {
                    let mut response = ui.selectable_label(false, word.as_str());
                    if let Some(definition) = self.dictionary.lookup(word) {
                        response = response.on_hover_text(definition);
                    }
                    if response.clicked() {
                        picked = Some(word.clone());
                    }
                }
            });

        if let Some(word) = picked {
            self.state.apply_suggestion(&word);
        }
    }
}

impl eframe::App for DictionaryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("search")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(SECTION_SPACING);
                self.show_search_bar(ui);
                ui.add_space(SECTION_SPACING);
                self.show_result(ui);
                ui.add_space(SECTION_SPACING);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_suggestions(ui);
        });
    }
}
