//! Feed response validation and decoding.

use log::debug;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::HTTP_STATUS_OK;
use crate::error_handling::RemoteFeedLoaderError;
use crate::feed::{FeedItem, LoadFeedResult};

/// Wire representation of the feed payload.
#[derive(Deserialize)]
struct Root {
    items: Vec<Item>,
}

/// Wire representation of one feed entry.
///
/// Unknown fields are ignored. `description` and `location` may be absent or
/// `null`; `id` and `image` are required.
#[derive(Deserialize)]
struct Item {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Accepts only the canonical 8-4-4-4-12 textual form (either letter case).
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if text.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(de::Error::invalid_length(
            text.len(),
            &"a hyphenated UUID string",
        ));
    }
    Uuid::parse_str(&text).map_err(de::Error::custom)
}

/// Turns a raw feed response into feed items.
///
/// Pure and stateless: safe to call from any number of completions at once.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Validates the status code and decodes the body.
    ///
    /// Only status 200 is accepted; any other status is rejected without looking
    /// at the body. The payload must be a JSON object with an `items` array.
    /// Items are returned in payload order. If any item fails to decode the
    /// whole response is rejected.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw response body
    /// * `status` - HTTP status code of the response
    ///
    /// # Errors
    ///
    /// Returns `RemoteFeedLoaderError::InvalidData` for a non-200 status or a
    /// body that does not match the feed schema.
    pub fn map(data: &[u8], status: u16) -> LoadFeedResult<RemoteFeedLoaderError> {
        if status != HTTP_STATUS_OK {
            debug!("Rejecting feed response with status {status}");
            return Err(RemoteFeedLoaderError::InvalidData);
        }

        let root: Root = serde_json::from_slice(data).map_err(|e| {
            debug!("Rejecting feed payload ({} bytes): {e}", data.len());
            RemoteFeedLoaderError::InvalidData
        })?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
