//! People directory with follow/unfollow affordances

use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::SimpleUser;

use super::FollowGraph;

/// All users, plus the viewer's following set
#[derive(Debug, Clone)]
pub struct PeopleDirectory {
    users: Vec<SimpleUser>,
    graph: FollowGraph,
}

impl PeopleDirectory {
    /// Directory for the signed-in user
    pub fn for_viewer(session: &Session) -> ApiResult<Self> {
        Ok(Self {
            users: Vec::new(),
            graph: FollowGraph::for_viewer(session)?,
        })
    }

    /// Users to display, in backend order, never including the viewer
    pub fn visible(&self) -> impl Iterator<Item = &SimpleUser> {
        let viewer = self.graph.user_id();
        self.users.iter().filter(move |u| u.id != viewer)
    }

    /// Whether the viewer follows `user_id`
    pub fn is_following(&self, user_id: &str) -> bool {
        self.graph.is_following(user_id)
    }

    /// Refetch users and the following list
    ///
    /// Both requests are attempted; a failed one leaves its list as it was and
    /// its error is returned.
    pub async fn refresh<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        let users = api.users(session).await;
        let following = self.graph.load_following(api, session).await;

        self.users = users?;
        following
    }

    /// Follow a user, then refetch the following list
    pub async fn follow<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        user_id: &str,
    ) -> ApiResult<()> {
        self.graph.follow(api, session, user_id).await
    }

    /// Unfollow a user, then refetch the following list
    pub async fn unfollow<B: Backend>(
        &mut self,
        api: &B,
        session: &Session,
        user_id: &str,
    ) -> ApiResult<()> {
        self.graph.unfollow(api, session, user_id).await
    }
}
