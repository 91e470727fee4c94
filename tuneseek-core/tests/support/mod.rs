use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;
use tuneseek_core::{CatalogClient, CatalogResponse, SearchOrchestrator, SearchStore};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

#[allow(dead_code)]
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Catalog payload with one row per `(id, name)`, in order
#[allow(dead_code)]
pub fn catalog_payload(rows: &[(i64, &str)]) -> Value {
    let results: Vec<Value> = rows
        .iter()
        .map(|(id, name)| {
            json!({
                "wrapperType": "track",
                "kind": "song",
                "trackId": id,
                "trackName": name,
                "artistName": "The Beatles",
                "collectionName": "Abbey Road",
                "artworkUrl100": format!("https://is1.example/{id}/100x100bb.jpg"),
                "previewUrl": format!("https://audio.example/{id}.m4a"),
                "primaryGenreName": "Rock",
                "releaseDate": "1969-09-26T07:00:00Z"
            })
        })
        .collect();
    json!({ "resultCount": results.len(), "results": results })
}

#[allow(dead_code)]
struct Scripted {
    delay: Duration,
    response: CatalogResponse,
}

/// In-memory catalog: records every call and answers from a script.
///
/// Unscripted calls answer immediately with an empty result set.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeCatalog {
    calls: RefCell<Vec<(String, Instant)>>,
    script: RefCell<VecDeque<Scripted>>,
}

#[allow(dead_code)]
impl FakeCatalog {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queue the answer for the next unanswered call
    pub fn respond(&self, delay: Duration, response: CatalogResponse) {
        self.script
            .borrow_mut()
            .push_back(Scripted { delay, response });
    }

    pub fn respond_with_tracks(&self, delay: Duration, rows: &[(i64, &str)]) {
        self.respond(delay, CatalogResponse::success(200, catalog_payload(rows)));
    }

    pub fn calls(&self) -> Vec<(String, Instant)> {
        self.calls.borrow().clone()
    }

    pub fn terms(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

#[async_trait(?Send)]
impl CatalogClient for FakeCatalog {
    async fn search(&self, term: &str) -> CatalogResponse {
        self.calls
            .borrow_mut()
            .push((term.to_string(), Instant::now()));
        let scripted = self.script.borrow_mut().pop_front();
        match scripted {
            Some(Scripted { delay, response }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => CatalogResponse::success(200, catalog_payload(&[])),
        }
    }
}

#[allow(dead_code)]
pub type SharedStore = Rc<RefCell<SearchStore>>;
#[allow(dead_code)]
pub type TestOrchestrator = SearchOrchestrator<Rc<FakeCatalog>, SharedStore>;

/// Orchestrator with the default 300ms quiet period over a fresh store
#[allow(dead_code)]
pub fn orchestrator() -> (Rc<FakeCatalog>, SharedStore, TestOrchestrator) {
    let catalog = FakeCatalog::new();
    let store: SharedStore = Rc::new(RefCell::new(SearchStore::new()));
    let orchestrator = SearchOrchestrator::new(Rc::clone(&catalog), Rc::clone(&store), ms(300));
    (catalog, store, orchestrator)
}
