//! Post and comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, timestamp};

/// A post as returned by `GET /posts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable backend ID
    pub id: String,
    /// Text content
    #[serde(default)]
    pub content: String,
    /// Attached image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Attached video URL
    #[serde(default)]
    pub video: Option<String>,
    /// When the post was created
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// Who wrote the post
    #[serde(default)]
    pub original_post_owner: Option<Author>,
    /// The reposted post, if this is a repost
    #[serde(default)]
    pub original_post: Option<Box<Post>>,
    /// Comments, attached once the comment panel has been opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl Post {
    /// Create an empty post with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            content: String::new(),
            image: None,
            video: None,
            created_at: None,
            original_post_owner: None,
            original_post: None,
            comments: None,
        }
    }

    /// Owner's username, or "Unknown User"
    pub fn owner_name(&self) -> &str {
        self.original_post_owner
            .as_ref()
            .map_or("Unknown User", |owner| owner.username.as_str())
    }

    /// Number of attached comments (0 when not loaded)
    pub fn comment_count(&self) -> usize {
        self.comments.as_ref().map_or(0, Vec::len)
    }
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Backend ID
    pub id: String,
    /// Text content
    #[serde(default)]
    pub content: String,
    /// When the comment was created
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// Comment author
    pub user: Author,
}

/// Body of `POST /posts` and `POST /posts/{id}/comment`
#[derive(Debug, Clone, Serialize)]
pub struct ContentRequest {
    /// Text content
    pub content: String,
}
