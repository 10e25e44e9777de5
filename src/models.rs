use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a channel category, as returned by `categories.sub_channels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub archive_channels: Vec<ArchiveChannel>,
    pub has_more: bool,
    /// Cursor for the next page. Opaque; hand it back as is. The last page
    /// may leave it out.
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveChannel {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
