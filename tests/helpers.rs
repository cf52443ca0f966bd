// Shared test helpers: an HTTP client spy and feed JSON fixtures.
//
// Included by other test files with `#[path = "helpers.rs"] mod helpers;`.

#![allow(dead_code)] // Not every test file uses every helper

use std::sync::{Arc, Mutex};

use feed_loader::{
    FeedItem, FeedLoader, HttpClient, HttpClientCompletion, LoadFeedResult, RemoteFeedLoader,
    RemoteFeedLoaderError, TransportError, TransportErrorKind, TransportResponse,
};
use serde_json::{json, Map, Value};
use url::Url;
use uuid::Uuid;

/// Records every `get` call and completes it only when the test asks.
///
/// Completions are taken out of the lock before they run, so a completion may
/// call back into the spy.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpClientCompletion>)>>,
}

impl HttpClientSpy {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// URLs requested so far, in call order.
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn complete_with_error(&self, error: TransportError, index: usize) {
        let completion = self.take_completion(index);
        completion(Err(error));
    }

    pub fn complete_with_status(&self, status: u16, data: Vec<u8>, index: usize) {
        let completion = self.take_completion(index);
        completion(Ok(TransportResponse { body: data, status }));
    }

    fn take_completion(&self, index: usize) -> HttpClientCompletion {
        self.messages.lock().unwrap()[index]
            .1
            .take()
            .unwrap_or_else(|| panic!("request {index} was already completed"))
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.messages
            .lock()
            .unwrap()
            .push((url.clone(), Some(completion)));
    }
}

/// Builds a loader wired to a fresh spy.
pub fn make_sut(url: Url) -> (RemoteFeedLoader, Arc<HttpClientSpy>) {
    let client = HttpClientSpy::new();
    let loader = RemoteFeedLoader::new(url, client.clone());
    (loader, client)
}

pub fn any_url() -> Url {
    Url::parse("http://any-url.com").unwrap()
}

pub fn connection_error() -> TransportError {
    TransportError::new(TransportErrorKind::Connect, "connection refused")
}

/// Builds a feed item together with its wire JSON.
///
/// Absent optionals are omitted from the JSON rather than sent as `null`.
pub fn make_item(
    id: Uuid,
    description: Option<&str>,
    location: Option<&str>,
    image_url: &str,
) -> (FeedItem, Value) {
    let item = FeedItem::new(
        id,
        description.map(str::to_string),
        location.map(str::to_string),
        Url::parse(image_url).unwrap(),
    );

    let mut object = Map::new();
    object.insert("id".to_string(), json!(id.hyphenated().to_string().to_uppercase()));
    if let Some(description) = description {
        object.insert("description".to_string(), json!(description));
    }
    if let Some(location) = location {
        object.insert("location".to_string(), json!(location));
    }
    object.insert("image".to_string(), json!(item.image_url().as_str()));

    (item, Value::Object(object))
}

pub fn make_items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).unwrap()
}

/// Outcomes captured from `load` completions.
pub type CapturedResults = Arc<Mutex<Vec<LoadFeedResult<RemoteFeedLoaderError>>>>;

/// Calls `load` and records every outcome delivered to its completion.
pub fn load_capturing(loader: &RemoteFeedLoader) -> CapturedResults {
    let captured: CapturedResults = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    loader.load(Box::new(move |result| sink.lock().unwrap().push(result)));
    captured
}

/// Runs `action` after a `load` call and asserts the single delivered outcome.
pub fn expect(
    loader: &RemoteFeedLoader,
    expected: LoadFeedResult<RemoteFeedLoaderError>,
    action: impl FnOnce(),
) {
    let captured = load_capturing(loader);
    action();

    let results = captured.lock().unwrap();
    assert_eq!(
        results.as_slice(),
        &[expected],
        "expected exactly one matching outcome"
    );
}
