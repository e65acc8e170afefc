//! Saved posts view
//!
//! Removing a bookmark uses the same toggle endpoint that creates one, then
//! refetches the whole list; nothing is removed locally.

use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::{BookmarkItem, Post};

/// The viewer's bookmarks
#[derive(Debug, Clone, Default)]
pub struct BookmarksView {
    items: Vec<BookmarkItem>,
}

impl BookmarksView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Every bookmark record in backend order, including ones whose post is gone
    pub fn items(&self) -> &[BookmarkItem] {
        &self.items
    }

    /// Rows to display: bookmarks whose post still exists
    pub fn rows(&self) -> impl Iterator<Item = (&BookmarkItem, &Post)> {
        self.items
            .iter()
            .filter_map(|item| item.post.as_ref().map(|post| (item, post)))
    }

    /// Whether `post_id` is among the displayed rows
    pub fn contains(&self, post_id: &str) -> bool {
        self.rows().any(|(_, post)| post.id == post_id)
    }

    /// Refetch the viewer's bookmarks
    pub async fn refresh<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        let viewer = session.viewer_id()?;
        self.items = api.bookmarks(session, viewer).await?;
        Ok(())
    }

    /// Toggle a bookmark, then refetch the list
    pub async fn toggle<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        post_id: &str,
    ) -> ApiResult<()> {
        api.bookmark(session, post_id).await?;
        self.refresh(api, session).await
    }
}
