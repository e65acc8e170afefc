//! Backend API client
//!
//! [`Backend`] lists every endpoint the views use. [`ApiClient`] implements it
//! over HTTP; the views only see the trait.

mod envelope;
mod error;
mod rest;

pub use envelope::{Envelope, message_of};
pub use error::RequestError;
pub use rest::{ApiClient, DEFAULT_API_URL, normalize_base_url};

use crate::auth::Session;
use crate::models::{
    Activity, AuthPayload, BookmarkItem, Comment, LoginRequest, Post, RegisterRequest, SimpleUser,
};

/// Result alias for backend calls
pub type ApiResult<T> = Result<T, RequestError>;

/// The REST surface of the social backend
///
/// Every call takes the session explicitly; the bearer token comes from it.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthPayload>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthPayload>;

    /// `GET /posts`, in backend order
    async fn posts(&self, session: &Session) -> ApiResult<Vec<Post>>;

    /// `POST /posts`
    async fn create_post(&self, session: &Session, content: &str) -> ApiResult<()>;

    /// `POST /posts/{id}/like` (toggles)
    async fn like(&self, session: &Session, post_id: &str) -> ApiResult<()>;

    /// `POST /posts/{id}/bookmark` (toggles)
    async fn bookmark(&self, session: &Session, post_id: &str) -> ApiResult<()>;

    /// `GET /posts/{id}/comments`
    async fn comments(&self, session: &Session, post_id: &str) -> ApiResult<Vec<Comment>>;

    /// `POST /posts/{id}/comment`, returning the created comment
    async fn comment(&self, session: &Session, post_id: &str, content: &str) -> ApiResult<Comment>;

    /// `GET /activity/feed`
    async fn activity_feed(&self, session: &Session) -> ApiResult<Vec<Activity>>;

    /// `GET /users`
    async fn users(&self, session: &Session) -> ApiResult<Vec<SimpleUser>>;

    /// `GET /users/{id}/followers`
    async fn followers(&self, session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>>;

    /// `GET /users/{id}/followings`
    async fn following(&self, session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>>;

    /// `POST /users/{id}/follow`
    async fn follow(&self, session: &Session, user_id: &str) -> ApiResult<()>;

    /// `POST /users/{id}/unfollow`
    async fn unfollow(&self, session: &Session, user_id: &str) -> ApiResult<()>;

    /// `GET /users/{id}/bookmarks`
    async fn bookmarks(&self, session: &Session, user_id: &str) -> ApiResult<Vec<BookmarkItem>>;
}
