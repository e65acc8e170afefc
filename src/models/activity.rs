//! Activity wall model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Kind of recorded activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    /// A post was created
    Post,
    /// A post was liked
    Like,
    /// A user was followed
    Follow,
    /// A comment was written
    Comment,
    /// Anything newer than this client
    #[serde(other)]
    Unknown,
}

impl ActionType {
    /// Short label for list display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Like => "like",
            Self::Follow => "follow",
            Self::Comment => "comment",
            Self::Unknown => "activity",
        }
    }
}

/// An entry of `GET /activity/feed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity ID
    pub id: String,
    /// Who acted
    pub actor_id: String,
    /// What happened
    pub action_type: ActionType,
    /// Post or user the action targets
    #[serde(default)]
    pub target_id: Option<String>,
    /// Human-readable summary
    #[serde(default)]
    pub message: String,
    /// When it happened
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}
