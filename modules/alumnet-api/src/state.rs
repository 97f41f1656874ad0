use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use alumnet_common::{AlumnetError, Profile};
use alumnet_feed::{load_directory, SheetFetcher};

/// The directory snapshot: the last successfully decoded collection plus
/// the outcome of the most recent load attempt. `profiles` stays `None`
/// until a load has ever succeeded.
#[derive(Default)]
pub struct Directory {
    pub profiles: Option<Arc<Vec<Profile>>>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

/// Result of a refresh attempt that completed without a feed error.
#[derive(Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was replaced with this many profiles.
    Applied(usize),
    /// A newer refresh started while this one was in flight; its result
    /// was discarded.
    Superseded,
}

pub struct AppState {
    pub directory: RwLock<Directory>,
    fetcher: Box<dyn SheetFetcher>,
    refresh_generation: AtomicU64,
}

impl AppState {
    pub fn new(fetcher: Box<dyn SheetFetcher>) -> Self {
        Self {
            directory: RwLock::new(Directory::default()),
            fetcher,
            refresh_generation: AtomicU64::new(0),
        }
    }

    /// The decoded collection, or the recorded load error when nothing has
    /// ever loaded.
    pub async fn profiles(&self) -> Result<Arc<Vec<Profile>>, String> {
        let directory = self.directory.read().await;
        match &directory.profiles {
            Some(profiles) => Ok(profiles.clone()),
            None => Err(directory
                .last_error
                .clone()
                .unwrap_or_else(|| "directory not loaded yet".to_string())),
        }
    }

    /// Re-fetch and decode the feed, replacing the snapshot on success.
    ///
    /// Last-request-wins: each refresh takes a generation number before
    /// fetching and only applies its result if no newer refresh has started
    /// by the time the fetch resolves. A failed fetch records the error and
    /// leaves the previous collection in place.
    pub async fn refresh(&self) -> Result<RefreshOutcome, AlumnetError> {
        let generation = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = load_directory(self.fetcher.as_ref()).await;

        if self.refresh_generation.load(Ordering::SeqCst) != generation {
            warn!(generation, "Discarding superseded refresh result");
            return Ok(RefreshOutcome::Superseded);
        }

        let mut directory = self.directory.write().await;
        match result {
            Ok(profiles) => {
                let count = profiles.len();
                info!(count, fetcher = self.fetcher.name(), "Directory refreshed");
                directory.profiles = Some(Arc::new(profiles));
                directory.fetched_at = Some(Utc::now());
                directory.last_error = None;
                Ok(RefreshOutcome::Applied(count))
            }
            Err(e) => {
                warn!(error = %e, "Directory refresh failed");
                directory.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    /// Returns one canned response per call; optionally the first call
    /// sleeps long enough for a later refresh to overtake it.
    struct SequencedFetcher {
        responses: Vec<Result<String, String>>,
        calls: AtomicUsize,
        slow_first_call: bool,
    }

    impl SequencedFetcher {
        fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses,
                calls: AtomicUsize::new(0),
                slow_first_call: false,
            }
        }

        fn slow_first(mut self) -> Self {
            self.slow_first_call = true;
            self
        }
    }

    #[async_trait::async_trait]
    impl SheetFetcher for SequencedFetcher {
        async fn fetch_csv(&self) -> Result<String, AlumnetError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 && self.slow_first_call {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            match self.responses.get(call) {
                Some(Ok(csv)) => Ok(csv.clone()),
                Some(Err(msg)) => Err(AlumnetError::Fetch(msg.clone())),
                None => Ok(String::new()),
            }
        }

        fn name(&self) -> &str {
            "sequenced"
        }
    }

    fn csv_with(names: &[&str]) -> String {
        let mut csv = "First Name,Last Name\n".to_string();
        for name in names {
            csv.push_str(name);
            csv.push_str(",Test\n");
        }
        csv
    }

    #[tokio::test]
    async fn refresh_applies_decoded_collection() {
        let state = AppState::new(Box::new(SequencedFetcher::new(vec![Ok(csv_with(&[
            "Ada", "Grace",
        ]))])));

        let outcome = state.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::Applied(2));

        let profiles = state.profiles().await.unwrap();
        assert_eq!(profiles.len(), 2);
        assert!(state.directory.read().await.last_error.is_none());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_collection() {
        let state = AppState::new(Box::new(SequencedFetcher::new(vec![
            Ok(csv_with(&["Ada"])),
            Err("feed returned HTTP 500".to_string()),
        ])));

        state.refresh().await.unwrap();
        let err = state.refresh().await.unwrap_err();
        assert!(err.to_string().contains("500"));

        let profiles = state.profiles().await.unwrap();
        assert_eq!(profiles.len(), 1, "previous collection still served");
        let directory = state.directory.read().await;
        assert!(directory.last_error.as_deref().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn profiles_before_any_load_reports_error() {
        let state = AppState::new(Box::new(SequencedFetcher::new(vec![])));
        let err = state.profiles().await.unwrap_err();
        assert!(err.contains("not loaded"));
    }

    #[tokio::test]
    async fn superseded_refresh_discards_stale_result() {
        let state = Arc::new(AppState::new(Box::new(
            SequencedFetcher::new(vec![
                Ok(csv_with(&["Stale"])),
                Ok(csv_with(&["Fresh", "Fresher"])),
            ])
            .slow_first(),
        )));

        let slow = tokio::spawn({
            let state = state.clone();
            async move { state.refresh().await }
        });

        // Let the slow refresh take its generation, then overtake it.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let fast = state.refresh().await.unwrap();
        assert_eq!(fast, RefreshOutcome::Applied(2));

        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow, RefreshOutcome::Superseded);

        let profiles = state.profiles().await.unwrap();
        assert_eq!(profiles.len(), 2, "stale result must not overwrite");
        assert_eq!(profiles[0].first_name, "Fresh");
    }
}
