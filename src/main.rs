use eframe::egui::{self, Vec2, vec2};
use tracing_subscriber::EnvFilter;
use word_lookup::{Dictionary, DictionaryApp, Settings};

const WINDOW_SIZE: Vec2 = vec2(520.0, 480.0);
const MIN_WINDOW_SIZE: Vec2 = vec2(360.0, 280.0);
const WINDOW_TITLE: &str = "Dictionary App";

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();
    let dictionary = Dictionary::load_or_empty(&settings.dictionary_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),

        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DictionaryApp::new(cc, dictionary)))),
    )
}
