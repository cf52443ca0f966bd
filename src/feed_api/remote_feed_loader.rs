//! Remote feed loader.

use std::sync::Arc;

use log::{debug, warn};
use url::Url;

use super::{FeedItemsMapper, HttpClient};
use crate::error_handling::RemoteFeedLoaderError;
use crate::feed::{FeedLoader, LoadFeedCompletion};

/// State shared between the loader and its pending completions.
struct LoaderState {
    url: Url,
    client: Arc<dyn HttpClient>,
}

/// Loads the feed from one URL through an `HttpClient`.
///
/// Each `load` call issues exactly one request and reports exactly one
/// outcome, unless the loader is dropped first: pending completions only hold
/// a `Weak` reference to the loader state and discard the outcome once it is
/// gone. A completion that has already started when the loader is dropped on
/// another thread still runs to the end. Constructing a loader performs no I/O.
pub struct RemoteFeedLoader {
    state: Arc<LoaderState>,
}

impl RemoteFeedLoader {
    /// Creates a loader for `url` that issues requests through `client`.
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            state: Arc::new(LoaderState { url, client }),
        }
    }

    /// The feed URL every `load` call requests.
    pub fn url(&self) -> &Url {
        &self.state.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    type Error = RemoteFeedLoaderError;

    /// Requests the feed and reports the mapped outcome to `completion`.
    ///
    /// Transport failures are reported as `Connectivity`; completed exchanges
    /// go through `FeedItemsMapper::map`. Calls are independent: no
    /// coalescing, caching, or ordering between them.
    fn load(&self, completion: LoadFeedCompletion<Self::Error>) {
        let state = &self.state;
        debug!("Requesting feed from {}", state.url);

        let loader = Arc::downgrade(state);
        state.client.get(
            &state.url,
            Box::new(move |result| {
                let Some(state) = loader.upgrade() else {
                    debug!("Discarding feed response: loader was released");
                    return;
                };

                let outcome = match result {
                    Ok(response) => FeedItemsMapper::map(&response.body, response.status),
                    Err(e) => {
                        warn!("Feed request to {} failed: {e}", state.url);
                        Err(RemoteFeedLoaderError::Connectivity)
                    }
                };
                completion(outcome);
            }),
        );
    }
}
