//! Bookmark model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Post, timestamp};

/// A saved-post relation from `GET /users/{id}/bookmarks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkItem {
    /// Bookmark ID
    pub id: String,
    /// Saved post ID
    pub post_id: String,
    /// Owner of the bookmark
    pub user_id: String,
    /// When the post was saved
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// The saved post; `None` once the post was deleted server-side
    #[serde(default)]
    pub post: Option<Post>,
}
