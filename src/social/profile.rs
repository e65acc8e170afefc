//! Profile view: followers / following tabs

use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::SimpleUser;

use super::FollowGraph;

/// Which list the profile shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    /// Users following the viewer
    #[default]
    Followers,
    /// Users the viewer follows
    Following,
}

impl ProfileTab {
    /// Tab label
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
        }
    }

    /// The other tab
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Followers => Self::Following,
            Self::Following => Self::Followers,
        }
    }
}

/// The signed-in user's profile
#[derive(Debug, Clone)]
pub struct ProfileView {
    graph: FollowGraph,
    /// Selected tab
    pub tab: ProfileTab,
}

impl ProfileView {
    /// Profile of the signed-in user
    pub fn for_viewer(session: &Session) -> ApiResult<Self> {
        Ok(Self {
            graph: FollowGraph::for_viewer(session)?,
            tab: ProfileTab::default(),
        })
    }

    /// Users listed under the selected tab
    pub fn displayed(&self) -> &[SimpleUser] {
        match self.tab {
            ProfileTab::Followers => self.graph.followers(),
            ProfileTab::Following => self.graph.following(),
        }
    }

    /// `(followers, following)` counts
    pub fn counts(&self) -> (usize, usize) {
        (self.graph.followers().len(), self.graph.following().len())
    }

    /// Refetch both lists independently
    pub async fn refresh<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        let followers = self.graph.load_followers(api, session).await;
        let following = self.graph.load_following(api, session).await;
        followers.and(following)
    }
}
