//! Per-profile follower/following lists


use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::SimpleUser;

/// Followers and following of one user
#[derive(Debug, Clone, Default)]
pub struct FollowGraph {
    user_id: String,
    followers: Vec<SimpleUser>,
    following: Vec<SimpleUser>,
}

impl FollowGraph {
    /// Graph of an arbitrary user
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }

    /// Graph of the signed-in user
    pub fn for_viewer(session: &Session) -> ApiResult<Self> {
        Ok(Self::new(session.viewer_id()?))
    }

    /// Whose graph this is
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Followers in backend order
    pub fn followers(&self) -> &[SimpleUser] {
        &self.followers
    }

    /// Followed users in backend order
    pub fn following(&self) -> &[SimpleUser] {
        &self.following
    }

    /// Whether `user_id` is in the following list
    pub fn is_following(&self, user_id: &str) -> bool {
        self.following.iter().any(|u| u.id == user_id)
    }

    /// Refetch the followers list
    pub async fn load_followers<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        self.followers = api.followers(session, &self.user_id).await?;
        Ok(())
    }

    /// Refetch the following list
    pub async fn load_following<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        self.following = api.following(session, &self.user_id).await?;
        Ok(())
    }

    /// Follow `target`, then refetch the following list
    ///
    /// Meant for the viewer's own graph ([`FollowGraph::for_viewer`]). The
    /// list only changes once both round trips complete.
    pub async fn follow<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        target: &str,
    ) -> ApiResult<()> {
        api.follow(session, target).await?;
        self.load_following(api, session).await
    }

    /// Unfollow `target`, then refetch the following list
    pub async fn unfollow<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        target: &str,
    ) -> ApiResult<()> {
        api.unfollow(session, target).await?;
        self.load_following(api, session).await
    }
}
