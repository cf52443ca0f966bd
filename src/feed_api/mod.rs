//! Remote feed loading over HTTP.
//!
//! This module provides the three-part pipeline behind `RemoteFeedLoader`:
//! - `HttpClient` - transport contract (one asynchronous GET per call)
//! - `FeedItemsMapper` - status validation and JSON decoding into `FeedItem`s
//! - `RemoteFeedLoader` - issues the request and reports one unified outcome
//!
//! `ReqwestHttpClient` is the production `HttpClient` implementation.

mod feed_items_mapper;
mod http_client;
mod remote_feed_loader;
mod reqwest_http_client;

// Re-export public API
pub use feed_items_mapper::FeedItemsMapper;
pub use http_client::{HttpClient, HttpClientCompletion, HttpClientResult, TransportResponse};
pub use remote_feed_loader::RemoteFeedLoader;
pub use reqwest_http_client::ReqwestHttpClient;
