//! Debounced global search
//!
//! The header search box feeds keystrokes into [`DebouncedSearch`]; a
//! query fires only after the input has been quiet for the configured
//! debounce window. A newer keystroke supersedes a pending timer but
//! never cancels a request already in flight; whichever response arrives
//! last overwrites the panel (last-write-wins, matching the observed
//! behavior this ports). Dismissing the panel is the one exception: a
//! response landing after a dismissal is discarded.

mod types;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::SessionContext;

pub use types::*;

/// Issues one search query. The trait seam keeps the debouncer testable
/// without a live backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResultSet, Error>;
}

#[derive(serde::Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
    total_results: usize,
}

/// The real backend: `GET /api/search?q=<query>` with the bearer token
pub struct HttpSearchBackend {
    url: String,
    client: Client,
    session: SessionContext,
    timeout: Option<Duration>,
}

impl HttpSearchBackend {
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionContext,
        options: &ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            timeout: options.request_timeout,
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResultSet, Error> {
        let url = format!("{}/api/search", self.url);
        let result = Fetch::get(&self.client, &url)
            .query("q", query)
            .bearer(self.session.store().token().as_deref())
            .timeout(self.timeout)
            .execute::<SearchResponse>()
            .await;

        match result {
            Ok(response) => Ok(SearchResultSet::new(
                query,
                response.results,
                response.total_results,
            )),
            Err(err) => {
                if err.is_unauthorized() {
                    self.session.teardown();
                }
                Err(err)
            }
        }
    }
}

/// Snapshot of the search panel for rendering
#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    /// Current input box contents
    pub input: String,

    /// Whether the result panel is open
    pub visible: bool,

    /// The query most recently dispatched to the backend
    pub last_query: Option<SearchQuery>,

    /// The most recently received result set
    pub results: Option<SearchResultSet>,

    /// The most recent query failure, if any
    pub error: Option<String>,
}

/// Debounced driver for the header search box
pub struct DebouncedSearch {
    backend: Arc<dyn SearchBackend>,
    debounce: Duration,
    min_len: usize,
    display_limit: usize,
    panel: Arc<Mutex<SearchPanel>>,
    generation: Arc<AtomicU64>,
    // bumped only by dismiss(); a response from before the bump is discarded
    epoch: Arc<AtomicU64>,
}

impl DebouncedSearch {
    pub fn new(backend: Arc<dyn SearchBackend>, options: &ClientOptions) -> Self {
        Self {
            backend,
            debounce: options.search_debounce,
            min_len: options.search_min_len,
            display_limit: options.search_display_limit,
            panel: Arc::new(Mutex::new(SearchPanel::default())),
            generation: Arc::new(AtomicU64::new(0)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// How many result items the panel should render at most
    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Feed the current input box contents.
    ///
    /// Restarts the quiet-period timer; any earlier pending timer is
    /// superseded. Input below the minimum length clears the results and
    /// hides the panel without querying.
    pub fn input(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let text = text.to_string();

        {
            let mut panel = self.panel.lock().unwrap();
            panel.input = text.clone();
            if text.chars().count() < self.min_len {
                panel.results = None;
                panel.error = None;
                panel.visible = false;
                return;
            }
        }

        let backend = Arc::clone(&self.backend);
        let panel = Arc::clone(&self.panel);
        let generations = Arc::clone(&self.generation);
        let epochs = Arc::clone(&self.epoch);
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if generations.load(Ordering::SeqCst) != generation {
                // superseded during the quiet period
                return;
            }

            let query = SearchQuery::new(text.clone());
            panel.lock().unwrap().last_query = Some(query);

            debug!("search: querying {:?}", text);
            let outcome = backend.search(&text).await;

            if epochs.load(Ordering::SeqCst) != epoch {
                // the panel was dismissed while this response was in
                // flight; dismissal is final
                return;
            }

            // Whatever arrives last wins; an in-flight request is never
            // cancelled by newer keystrokes.
            let mut panel = panel.lock().unwrap();
            match outcome {
                Ok(results) => {
                    panel.results = Some(results);
                    panel.error = None;
                    panel.visible = true;
                }
                Err(err) => {
                    panel.results = None;
                    panel.error = Some(err.to_string());
                    panel.visible = true;
                }
            }
        });
    }

    /// Escape key or outside click: close the panel and clear the input.
    /// Unlike a newer keystroke, dismissal also discards any response
    /// still in flight.
    pub fn dismiss(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let mut panel = self.panel.lock().unwrap();
        panel.input.clear();
        panel.last_query = None;
        panel.results = None;
        panel.error = None;
        panel.visible = false;
    }

    /// Snapshot of the current panel state
    pub fn panel(&self) -> SearchPanel {
        self.panel.lock().unwrap().clone()
    }
}
