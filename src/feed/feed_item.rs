//! Feed item value type.

use url::Url;
use uuid::Uuid;

/// One validated feed entry.
///
/// Equality is structural. Items are built once by the mapper and never
/// mutated afterwards, so fields are exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl FeedItem {
    /// Creates a feed item from already validated parts.
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    /// Unique identifier of the entry.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Optional description text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Optional location text.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Absolute URL of the entry's image.
    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}
