//! Feed / post list controller
//!
//! Owns the post list in backend order and the per-post comment panel state.
//!
//! Each post's panel is independent:
//!
//! ```text
//!   Collapsed ──toggle──▶ Expanded   (first expansion fetches comments)
//!       ▲                    │
//!       └──────toggle────────┘       (collapse keeps loaded comments)
//! ```
//!
//! A full list refetch replaces every post and resets all panels to
//! collapsed and unloaded. New posts and likes refetch the list; new comments
//! are appended from the server's response; the feed bookmark toggle only
//! fires the request.

use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::Post;

/// Comment panel state for one post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPanel {
    expanded: bool,
    loaded: bool,
    /// Comment being composed for this post
    pub draft: String,
}

impl CommentPanel {
    /// Whether the panel is open
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether comments were fetched since the post was loaded
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// A post plus its panel
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// The post as last fetched (comments attached lazily)
    pub post: Post,
    /// Comment panel
    pub panel: CommentPanel,
}

/// The post list view
#[derive(Debug, Default)]
pub struct FeedController {
    entries: Vec<FeedEntry>,
    /// New post being composed
    pub compose: String,
}

impl FeedController {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in backend order
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Posts in backend order
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.entries.iter().map(|e| &e.post)
    }

    /// Look up an entry by post ID
    pub fn entry(&self, post_id: &str) -> Option<&FeedEntry> {
        self.entries.iter().find(|e| e.post.id == post_id)
    }

    fn entry_mut(&mut self, post_id: &str) -> Option<&mut FeedEntry> {
        self.entries.iter_mut().find(|e| e.post.id == post_id)
    }

    /// Replace the list with the backend's
    ///
    /// Panels reset to collapsed; comment drafts survive for posts that are
    /// still listed. On failure the previous list stays.
    pub async fn refresh<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        let posts = api.posts(session).await?;

        let entries = posts
            .into_iter()
            .map(|post| {
                let draft = self
                    .entry(&post.id)
                    .map(|e| e.panel.draft.clone())
                    .unwrap_or_default();
                FeedEntry {
                    post,
                    panel: CommentPanel {
                        draft,
                        ..CommentPanel::default()
                    },
                }
            })
            .collect();

        self.entries = entries;
        Ok(())
    }

    /// Publish the composed post, then refetch the list
    ///
    /// Returns `false` without a request when the compose field is blank. The
    /// field is cleared only once the backend accepted the post.
    pub async fn create_post<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<bool> {
        if self.compose.trim().is_empty() {
            return Ok(false);
        }

        api.create_post(session, &self.compose).await?;
        self.compose.clear();
        self.refresh(api, session).await?;
        Ok(true)
    }

    /// Toggle a like, then refetch the list
    pub async fn like<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        post_id: &str,
    ) -> ApiResult<()> {
        api.like(session, post_id).await?;
        self.refresh(api, session).await
    }

    /// Toggle a bookmark
    ///
    /// Nothing in the feed changes: the list is not refetched and entries do
    /// not carry a bookmarked flag.
    pub async fn bookmark<B: Backend>(
        &self,
        api: &B,
        session: &Session,
        post_id: &str,
    ) -> ApiResult<()> {
        api.bookmark(session, post_id).await?;
        tracing::debug!("Toggled bookmark on {post_id}");
        Ok(())
    }

    /// Open or close a post's comment panel
    ///
    /// Opening fetches comments only if they were not loaded since the post
    /// was (re)fetched. If that fetch fails the panel stays open without
    /// comments and the next opening tries again.
    pub async fn toggle_comments<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        post_id: &str,
    ) -> ApiResult<()> {
        let Some(entry) = self.entry_mut(post_id) else {
            tracing::debug!("toggle_comments: no post {post_id}");
            return Ok(());
        };

        if entry.panel.expanded {
            entry.panel.expanded = false;
            return Ok(());
        }

        entry.panel.expanded = true;
        if entry.panel.loaded {
            return Ok(());
        }

        let comments = api.comments(session, post_id).await?;
        if let Some(entry) = self.entry_mut(post_id) {
            entry.post.comments = Some(comments);
            entry.panel.loaded = true;
        }
        Ok(())
    }

    /// Set the comment draft for a post
    pub fn set_draft(&mut self, post_id: &str, text: &str) {
        if let Some(entry) = self.entry_mut(post_id) {
            entry.panel.draft = text.to_string();
        }
    }

    /// Send the post's comment draft and append the returned comment
    ///
    /// Returns `false` without a request when the draft is blank or the post
    /// is not listed. Only that post's comments change; the list is not
    /// refetched.
    pub async fn post_comment<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        post_id: &str,
    ) -> ApiResult<bool> {
        let Some(draft) = self
            .entry(post_id)
            .map(|e| e.panel.draft.clone())
            .filter(|d| !d.trim().is_empty())
        else {
            return Ok(false);
        };

        let comment = api.comment(session, post_id, &draft).await?;
        if let Some(entry) = self.entry_mut(post_id) {
            entry.panel.draft.clear();
            entry.post.comments.get_or_insert_with(Vec::new).push(comment);
        }
        Ok(true)
    }
}
