use async_trait::async_trait;
use tracing::info;

use alumnet_common::AlumnetError;

// --- SheetFetcher trait ---

/// Source of the raw spreadsheet CSV text. Tests substitute a canned
/// implementation; production uses the HTTP export endpoint.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch_csv(&self) -> Result<String, AlumnetError>;
    fn name(&self) -> &str;
}

// --- HTTP fetcher ---

/// Fetches the published CSV export with a single GET. No retries; a failed
/// fetch is surfaced to the caller, which re-triggers manually.
pub struct HttpSheetFetcher {
    url: String,
    client: reqwest::Client,
}

impl HttpSheetFetcher {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SheetFetcher for HttpSheetFetcher {
    async fn fetch_csv(&self) -> Result<String, AlumnetError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AlumnetError::Fetch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlumnetError::Fetch(format!("feed returned HTTP {status}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AlumnetError::Fetch(format!("failed to read body: {e}")))?;

        info!(bytes = text.len(), "Fetched sheet CSV");
        Ok(text)
    }

    fn name(&self) -> &str {
        "http"
    }
}
