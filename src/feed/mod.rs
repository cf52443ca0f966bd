//! Feed domain model.
//!
//! This module provides the types every layer above the network boundary works with:
//! - `FeedItem` - one validated feed entry
//! - `FeedLoader` - the completion-based loading contract
//! - `load_feed()` - awaits a single `FeedLoader::load` outcome

mod feed_item;
mod feed_loader;

// Re-export public API
pub use feed_item::FeedItem;
pub use feed_loader::{load_feed, FeedLoader, LoadFeedCompletion, LoadFeedResult};
