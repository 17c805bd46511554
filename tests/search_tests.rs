use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dojoadmin::config::ClientOptions;
use dojoadmin::error::Error;
use dojoadmin::search::{
    DebouncedSearch, EntityKind, SearchBackend, SearchResult, SearchResultSet,
};

/// Records every query it receives; optionally delays a response so
/// out-of-order arrival can be exercised under the paused clock.
struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    items: usize,
    total: usize,
    delay_for: Option<(String, Duration)>,
}

impl RecordingBackend {
    fn new(items: usize, total: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            items,
            total,
            delay_for: None,
        }
    }

    fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delay_for = Some((query.to_string(), delay));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn result_set(&self, query: &str) -> SearchResultSet {
        let items = (0..self.items)
            .map(|i| SearchResult {
                id: format!("s-{}", i),
                kind: EntityKind::Student,
                title: format!("{} hit {}", query, i),
                subtitle: String::new(),
            })
            .collect();
        SearchResultSet::new(query, items, self.total)
    }
}

#[async_trait]
impl SearchBackend for RecordingBackend {
    async fn search(&self, query: &str) -> Result<SearchResultSet, Error> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some((delayed, delay)) = &self.delay_for {
            if delayed == query {
                tokio::time::sleep(*delay).await;
            }
        }
        Ok(self.result_set(query))
    }
}

fn search_over(backend: Arc<RecordingBackend>) -> DebouncedSearch {
    DebouncedSearch::new(backend, &ClientOptions::default())
}

#[tokio::test(start_paused = true)]
async fn short_input_never_queries_and_hides_the_panel() {
    let backend = Arc::new(RecordingBackend::new(3, 3));
    let search = search_over(backend.clone());

    search.input("");
    search.input("a");
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(backend.calls().is_empty());
    let panel = search.panel();
    assert!(!panel.visible);
    assert!(panel.results.is_none());
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_issue_exactly_one_query_for_the_final_value() {
    let backend = Arc::new(RecordingBackend::new(3, 3));
    let search = search_over(backend.clone());

    search.input("k");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search.input("ka");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search.input("kar");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search.input("kara");

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(backend.calls(), vec!["kara".to_string()]);
    let panel = search.panel();
    assert!(panel.visible);
    assert_eq!(panel.last_query.unwrap().text, "kara");
    assert_eq!(panel.results.unwrap().query, "kara");
}

#[tokio::test(start_paused = true)]
async fn two_character_query_shows_the_backend_total_verbatim() {
    let backend = Arc::new(RecordingBackend::new(7, 7));
    let search = search_over(backend.clone());

    search.input("ab");
    tokio::time::sleep(Duration::from_millis(350)).await;

    assert_eq!(backend.calls(), vec!["ab".to_string()]);
    let panel = search.panel();
    let results = panel.results.unwrap();
    assert_eq!(results.total_results, 7);
    assert_eq!(results.display_items(search.display_limit()).len(), 7);
}

#[tokio::test(start_paused = true)]
async fn display_items_truncate_but_the_total_does_not() {
    let backend = Arc::new(RecordingBackend::new(12, 25));
    let search = search_over(backend.clone());

    search.input("belt");
    tokio::time::sleep(Duration::from_millis(350)).await;

    let panel = search.panel();
    let results = panel.results.unwrap();
    assert_eq!(results.display_items(10).len(), 10);
    assert_eq!(results.total_results, 25);
}

#[tokio::test(start_paused = true)]
async fn last_received_response_wins() {
    // "ka" takes 600 ms to answer, "kara" answers immediately; the
    // slower, older response lands last and overwrites the panel.
    let backend =
        Arc::new(RecordingBackend::new(2, 2).with_delay("ka", Duration::from_millis(600)));
    let search = search_over(backend.clone());

    search.input("ka");
    // past the quiet period: "ka" is now in flight
    tokio::time::sleep(Duration::from_millis(320)).await;

    search.input("kara");
    tokio::time::sleep(Duration::from_millis(320)).await;
    assert_eq!(
        search.panel().results.unwrap().query,
        "kara",
        "newer response arrived first"
    );

    // let the stale "ka" response land
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(backend.calls(), vec!["ka".to_string(), "kara".to_string()]);
    assert_eq!(search.panel().results.unwrap().query, "ka");
}

#[tokio::test(start_paused = true)]
async fn dismiss_discards_a_response_still_in_flight() {
    let backend =
        Arc::new(RecordingBackend::new(2, 2).with_delay("ka", Duration::from_millis(600)));
    let search = search_over(backend.clone());

    search.input("ka");
    // past the quiet period: "ka" is now in flight
    tokio::time::sleep(Duration::from_millis(320)).await;
    assert_eq!(backend.calls(), vec!["ka".to_string()]);

    search.dismiss();
    tokio::time::sleep(Duration::from_millis(700)).await;

    // the late response must not reopen a panel the user closed
    let panel = search.panel();
    assert!(!panel.visible);
    assert!(panel.results.is_none());
    assert!(panel.last_query.is_none());
}

#[tokio::test(start_paused = true)]
async fn dismiss_clears_input_and_closes_the_panel() {
    let backend = Arc::new(RecordingBackend::new(3, 3));
    let search = search_over(backend.clone());

    search.input("kata");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(search.panel().visible);

    search.dismiss();
    let panel = search.panel();
    assert!(!panel.visible);
    assert!(panel.input.is_empty());
    assert!(panel.results.is_none());
}

#[tokio::test(start_paused = true)]
async fn shortening_below_the_minimum_clears_without_querying_again() {
    let backend = Arc::new(RecordingBackend::new(3, 3));
    let search = search_over(backend.clone());

    search.input("ab");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(backend.calls().len(), 1);

    search.input("a");
    tokio::time::sleep(Duration::from_millis(350)).await;

    assert_eq!(backend.calls().len(), 1);
    let panel = search.panel();
    assert!(!panel.visible);
    assert!(panel.results.is_none());
}

#[test]
fn results_group_by_entity_kind() {
    let items = vec![
        SearchResult {
            id: "c-1".to_string(),
            kind: EntityKind::Coach,
            title: "Aiko Sato".to_string(),
            subtitle: "Karate".to_string(),
        },
        SearchResult {
            id: "s-1".to_string(),
            kind: EntityKind::Student,
            title: "Kenta Mori".to_string(),
            subtitle: String::new(),
        },
        SearchResult {
            id: "c-2".to_string(),
            kind: EntityKind::Coach,
            title: "Ben Ito".to_string(),
            subtitle: "Judo".to_string(),
        },
    ];
    let set = SearchResultSet::new("a", items, 3);

    let grouped = set.grouped();
    assert_eq!(grouped[&EntityKind::Coach].len(), 2);
    assert_eq!(grouped[&EntityKind::Student].len(), 1);
}

#[tokio::test(start_paused = true)]
async fn a_failed_query_surfaces_in_the_panel() {
    struct FailingBackend;

    #[async_trait]
    impl SearchBackend for FailingBackend {
        async fn search(&self, _query: &str) -> Result<SearchResultSet, Error> {
            Err(Error::Server { status: 502 })
        }
    }

    let search = DebouncedSearch::new(Arc::new(FailingBackend), &ClientOptions::default());
    search.input("kata");
    tokio::time::sleep(Duration::from_millis(350)).await;

    let panel = search.panel();
    assert!(panel.visible);
    assert!(panel.results.is_none());
    assert!(panel.error.unwrap().contains("server error"));
}

#[test]
fn a_newer_query_carries_a_later_timestamp() {
    use dojoadmin::search::SearchQuery;

    let first = SearchQuery::new("ka");
    let second = SearchQuery::new("kara");
    assert!(second.issued_at >= first.issued_at);
    assert_eq!(second.text, "kara");
}

#[test]
fn a_total_smaller_than_the_item_count_is_repaired() {
    let items = vec![SearchResult {
        id: "s-1".to_string(),
        kind: EntityKind::Student,
        title: "Kenta Mori".to_string(),
        subtitle: String::new(),
    }];
    let set = SearchResultSet::new("ken", items, 0);
    assert_eq!(set.total_results, 1);
}
