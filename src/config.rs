//! Command line and environment configuration.
use clap::Parser;
use url::Url;

/// Address the flashcards server listens on by default.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Parser, Debug, Clone)]
#[command(name = "flashcards", about = "Create flashcards and browse the ones stored on a server", version)]
pub struct Config {
    /// Base URL of the flashcards API server
    #[arg(long, env = "FLASHCARDS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Initial window width
    #[arg(long, default_value_t = 500.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 700.0)]
    pub height: f32,
}
