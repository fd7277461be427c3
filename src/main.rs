mod app;

use app::FlashcardsApp;
use clap::Parser;
use flashcard_widget::config::Config;
use flashcard_widget::{FlashcardForm, FlashcardWidget, HttpFlashcardApi, RenderedList};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    let api = HttpFlashcardApi::new(config.api_url.as_str())?;
    let runtime = tokio::runtime::Runtime::new()?;

    log::info!("Using flashcards API at {}", config.api_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let widget = FlashcardWidget::init(
                FlashcardForm::default(),
                RenderedList::default(),
                Arc::new(api),
                runtime.handle().clone(),
                Arc::new(move || ctx.request_repaint()),
            );
            Ok(Box::new(FlashcardsApp::new(widget, runtime)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the flashcards window: {}", e))
}
