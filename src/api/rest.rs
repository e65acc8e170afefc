//! HTTP implementation of [`Backend`]

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Session;
use crate::models::{
    Activity, AuthPayload, BookmarkItem, Comment, ContentRequest, LoginRequest, Post,
    RegisterRequest, SimpleUser,
};

use super::{ApiResult, Backend, Envelope, RequestError, message_of};

/// Base URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api/v1";

const API_PREFIX: &str = "/api/v1";

/// Normalize a configured base URL so it always ends in `/api/v1`
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_URL.to_string();
    }
    if trimmed.ends_with(API_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_PREFIX}")
    }
}

/// REST client for the social backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build API URL
    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and parse the response envelope
    ///
    /// Attaches `Authorization: Bearer <token>` when the session has a token.
    /// A non-2xx status becomes [`RequestError::Status`] carrying the
    /// backend's message. Nothing is retried.
    pub async fn request(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<Envelope> {
        let url = self.api_url(path);
        tracing::debug!("{method} {url}");

        let mut request = self.client.request(method, &url);
        if let Some(token) = session.token() {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
        };

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                message: message_of(&body),
            });
        }

        Ok(Envelope::from_body(body))
    }

    async fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> ApiResult<T> {
        self.request(session, Method::GET, path, None)
            .await?
            .into_data()
    }

    async fn post<B: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ApiResult<Envelope> {
        let body = serde_json::to_value(body)?;
        self.request(session, Method::POST, path, Some(&body)).await
    }

    async fn post_empty(&self, session: &Session, path: &str) -> ApiResult<()> {
        self.request(session, Method::POST, path, None).await?;
        Ok(())
    }
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

impl Backend for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthPayload> {
        self.post(&Session::anonymous(), "/auth/register", request)
            .await?
            .into_data()
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthPayload> {
        self.post(&Session::anonymous(), "/auth/login", request)
            .await?
            .into_data()
    }

    async fn posts(&self, session: &Session) -> ApiResult<Vec<Post>> {
        self.get(session, "/posts").await
    }

    async fn create_post(&self, session: &Session, content: &str) -> ApiResult<()> {
        let request = ContentRequest {
            content: content.to_string(),
        };
        self.post(session, "/posts", &request).await?;
        Ok(())
    }

    async fn like(&self, session: &Session, post_id: &str) -> ApiResult<()> {
        self.post_empty(session, &format!("/posts/{}/like", segment(post_id)))
            .await
    }

    async fn bookmark(&self, session: &Session, post_id: &str) -> ApiResult<()> {
        self.post_empty(session, &format!("/posts/{}/bookmark", segment(post_id)))
            .await
    }

    async fn comments(&self, session: &Session, post_id: &str) -> ApiResult<Vec<Comment>> {
        self.get(session, &format!("/posts/{}/comments", segment(post_id)))
            .await
    }

    async fn comment(&self, session: &Session, post_id: &str, content: &str) -> ApiResult<Comment> {
        let request = ContentRequest {
            content: content.to_string(),
        };
        self.post(
            session,
            &format!("/posts/{}/comment", segment(post_id)),
            &request,
        )
        .await?
        .into_data()
    }

    async fn activity_feed(&self, session: &Session) -> ApiResult<Vec<Activity>> {
        self.get(session, "/activity/feed").await
    }

    async fn users(&self, session: &Session) -> ApiResult<Vec<SimpleUser>> {
        self.get(session, "/users").await
    }

    async fn followers(&self, session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>> {
        self.get(session, &format!("/users/{}/followers", segment(user_id)))
            .await
    }

    async fn following(&self, session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>> {
        self.get(session, &format!("/users/{}/followings", segment(user_id)))
            .await
    }

    async fn follow(&self, session: &Session, user_id: &str) -> ApiResult<()> {
        self.post_empty(session, &format!("/users/{}/follow", segment(user_id)))
            .await
    }

    async fn unfollow(&self, session: &Session, user_id: &str) -> ApiResult<()> {
        self.post_empty(session, &format!("/users/{}/unfollow", segment(user_id)))
            .await
    }

    async fn bookmarks(&self, session: &Session, user_id: &str) -> ApiResult<Vec<BookmarkItem>> {
        self.get(session, &format!("/users/{}/bookmarks", segment(user_id)))
            .await
    }
}
