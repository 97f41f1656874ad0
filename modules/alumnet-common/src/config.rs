use std::env;

/// Published CSV export of the member intake form responses.
const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/1Bk0d_WZjTZ2Oaw74lauO0WONHlH6Ya-O0g8NVetlp4Q/export?format=csv&gid=1346626676";

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet CSV export URL the directory is loaded from.
    pub feed_url: String,

    // Web server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            feed_url: env::var("ALUMNET_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            host: env::var("ALUMNET_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ALUMNET_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("ALUMNET_PORT must be a number"),
        }
    }
}
