//! Activity wall

use crate::api::{ApiResult, Backend};
use crate::auth::Session;
use crate::models::Activity;

/// Recent activity across the network, newest first as the backend orders it
#[derive(Debug, Clone, Default)]
pub struct ActivityWall {
    activities: Vec<Activity>,
}

impl ActivityWall {
    /// Create an empty wall
    pub fn new() -> Self {
        Self::default()
    }

    /// Activities in backend order
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Refetch the wall
    pub async fn refresh<B: Backend>(&mut self, api: &B, session: &Session) -> ApiResult<()> {
        self.activities = api.activity_feed(session).await?;
        Ok(())
    }
}
