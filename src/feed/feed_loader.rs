//! Completion-based feed loading contract.

use futures::channel::oneshot;

use super::FeedItem;

/// Outcome of one `FeedLoader::load` call.
pub type LoadFeedResult<E> = Result<Vec<FeedItem>, E>;

/// Callback receiving the outcome of one `FeedLoader::load` call.
pub type LoadFeedCompletion<E> = Box<dyn FnOnce(LoadFeedResult<E>) + Send + 'static>;

/// Something that can load the feed.
///
/// `load` returns immediately; the outcome is delivered later through
/// `completion`, possibly on another thread. Implementations deliver at most
/// one outcome per call.
pub trait FeedLoader: Send + Sync {
    /// Error reported through the completion.
    type Error: std::error::Error + Send + 'static;

    /// Starts loading the feed and reports the outcome to `completion`.
    fn load(&self, completion: LoadFeedCompletion<Self::Error>);
}

/// Loads the feed once and waits for the outcome.
///
/// Bridges the completion contract to a future. Returns `None` when the
/// completion was dropped without being invoked, which happens when the
/// loader is released before the transport finishes.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use feed_loader::{load_feed, RemoteFeedLoader, ReqwestHttpClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Arc::new(ReqwestHttpClient::new(Arc::new(reqwest::Client::new()))?);
/// let loader = RemoteFeedLoader::new(Url::parse("https://example.com/feed.json")?, client);
/// if let Some(Ok(items)) = load_feed(&loader).await {
///     println!("Loaded {} items", items.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn load_feed<L>(loader: &L) -> Option<LoadFeedResult<L::Error>>
where
    L: FeedLoader + ?Sized,
{
    let (sender, receiver) = oneshot::channel();
    loader.load(Box::new(move |result| {
        // The receiver only goes away if the awaiting future was dropped
        let _ = sender.send(result);
    }));
    receiver.await.ok()
}
