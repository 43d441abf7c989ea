//! Server settings, read from command-line flags with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;

/// Ghibli movie review server
#[derive(Parser, Debug, Clone)]
#[command(name = "movie-reviews")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "REVIEWS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "REVIEWS_PORT", default_value_t = 5000)]
    pub port: u16,

    /// SQLite file holding the reviews (`:memory:` for a throwaway store)
    #[arg(long, env = "REVIEWS_DATABASE", default_value = "thereviews.db")]
    pub database: PathBuf,

    /// Directory served under `/static`
    #[arg(long, env = "REVIEWS_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
