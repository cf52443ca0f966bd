//! feed_loader library: remote feed loading and validation
//!
//! This library fetches a JSON feed over HTTP and turns the response into
//! validated `FeedItem`s. Callers only ever see two failure kinds:
//! `Connectivity` when the exchange did not complete, and `InvalidData` when
//! the status or body failed validation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use feed_loader::{FeedLoader, RemoteFeedLoader, ReqwestHttpClient};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(ReqwestHttpClient::new(Arc::new(reqwest::Client::new()))?);
//! let loader = RemoteFeedLoader::new(Url::parse("https://example.com/feed.json")?, client);
//!
//! loader.load(Box::new(|result| match result {
//!     Ok(items) => println!("Loaded {} items", items.len()),
//!     Err(e) => eprintln!("Feed unavailable: {e}"),
//! }));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `ReqwestHttpClient` requires a Tokio runtime. The loader and mapper
//! themselves are runtime-agnostic and work with any `HttpClient`.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod feed;
mod feed_api;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, InitializationError, RemoteFeedLoaderError, TransportError,
    TransportErrorKind,
};
pub use feed::{load_feed, FeedItem, FeedLoader, LoadFeedCompletion, LoadFeedResult};
pub use feed_api::{
    FeedItemsMapper, HttpClient, HttpClientCompletion, HttpClientResult, RemoteFeedLoader,
    ReqwestHttpClient, TransportResponse,
};
pub use run::{run_load, LoadReport};

// Internal run module (wires the production client to the loader)
mod run {
    use anyhow::{anyhow, Context, Result};
    use std::time::Instant;
    use url::Url;

    use log::info;

    use crate::config::Config;
    use crate::feed::{load_feed, FeedItem};
    use crate::feed_api::{RemoteFeedLoader, ReqwestHttpClient};
    use crate::initialization::init_client;

    /// Results of a feed load.
    #[derive(Debug, Clone)]
    pub struct LoadReport {
        /// URL the feed was loaded from
        pub url: Url,
        /// Validated feed items, in payload order
        pub items: Vec<FeedItem>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Loads the feed described by `config` once.
    ///
    /// Builds the HTTP client, wraps it in a `ReqwestHttpClient`, and awaits a
    /// single `RemoteFeedLoader::load`.
    ///
    /// # Arguments
    ///
    /// * `config` - Feed URL and transport settings
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - It is called outside a Tokio runtime
    /// - The feed load fails with `Connectivity` or `InvalidData`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use feed_loader::{run_load, Config};
    /// use url::Url;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::new(Url::parse("https://example.com/feed.json")?);
    /// let report = run_load(config).await?;
    /// println!("Loaded {} items", report.items.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_load(config: Config) -> Result<LoadReport> {
        let start = Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let http_client =
            ReqwestHttpClient::new(client).context("Failed to initialize feed transport")?;
        let loader = RemoteFeedLoader::new(config.url.clone(), std::sync::Arc::new(http_client));

        let items = load_feed(&loader)
            .await
            .ok_or_else(|| anyhow!("Feed load from {} ended without an outcome", config.url))?
            .with_context(|| format!("Failed to load feed from {}", config.url))?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Loaded {} feed item{} from {} in {:.2}s",
            items.len(),
            if items.len() == 1 { "" } else { "s" },
            config.url,
            elapsed_seconds
        );

        Ok(LoadReport {
            url: config.url,
            items,
            elapsed_seconds,
        })
    }
}
