//! Reqwest-backed `HttpClient`.
//!
//! This adapter owns transport details only: sending the request on the Tokio
//! runtime, reading the body, and categorizing reqwest failures. It never looks
//! at the status code; that is the mapper's job.

use std::sync::Arc;

use log::debug;
use tokio::runtime::Handle;
use url::Url;

use super::{HttpClient, HttpClientCompletion, HttpClientResult, TransportResponse};
use crate::config::FEED_ACCEPT_HEADER;
use crate::error_handling::{InitializationError, TransportError, TransportErrorKind};

/// Production `HttpClient` built on a shared `reqwest::Client`.
///
/// Each `get` spawns one task on the runtime captured at construction, so the
/// completion runs on a runtime worker thread. If that runtime has shut down,
/// the completion still runs once with a `TransportErrorKind::Other` error.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Creates an adapter bound to the current Tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client (see `initialization::init_client`)
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::RuntimeUnavailableError` when called
    /// outside a Tokio runtime.
    pub fn new(client: Arc<reqwest::Client>) -> Result<Self, InitializationError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(client, runtime))
    }

    /// Creates an adapter that spawns requests on an explicit runtime.
    pub fn with_runtime(client: Arc<reqwest::Client>, runtime: Handle) -> Self {
        Self { client, runtime }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = Arc::clone(&self.client);
        let url = url.clone();
        let pending = PendingCompletion(Some(completion));
        self.runtime.spawn(async move {
            let outcome = fetch(&client, url).await;
            pending.complete(outcome);
        });
    }
}

/// Completion that reports a transport error if its task is dropped unfinished.
///
/// Tokio drops a spawned future without polling it when the runtime is shut
/// down, and drops in-flight futures during shutdown.
struct PendingCompletion(Option<HttpClientCompletion>);

impl PendingCompletion {
    fn complete(mut self, outcome: HttpClientResult) {
        if let Some(completion) = self.0.take() {
            completion(outcome);
        }
    }
}

impl Drop for PendingCompletion {
    fn drop(&mut self) {
        if let Some(completion) = self.0.take() {
            debug!("Request task dropped before completing: runtime shut down");
            completion(Err(TransportError::new(
                TransportErrorKind::Other,
                "runtime shut down before the request completed",
            )));
        }
    }
}

/// Performs one GET exchange and collects the body.
///
/// Any status code counts as a completed exchange.
async fn fetch(client: &reqwest::Client, url: Url) -> HttpClientResult {
    debug!("GET {url}");
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, FEED_ACCEPT_HEADER)
        .send()
        .await
        .map_err(TransportError::from)?;

    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(TransportError::from)?;
    debug!("Received status {status} with {} body bytes", body.len());

    Ok(TransportResponse {
        body: body.to_vec(),
        status,
    })
}
