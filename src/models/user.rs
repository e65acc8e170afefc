//! User models and auth payloads

use serde::{Deserialize, Serialize};

/// Profile picture reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicture {
    /// Image URL
    pub image: String,
}

/// The signed-in user's identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user ID
    pub id: String,
    /// Username
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

/// A user as listed in People, Followers and Following
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleUser {
    /// Backend user ID
    pub id: String,
    /// Username
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar
    #[serde(default)]
    pub profile_picture: Option<ProfilePicture>,
}

/// Author summary embedded in posts and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Username
    pub username: String,
    /// Avatar
    #[serde(default)]
    pub profile_picture: Option<ProfilePicture>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Token and identity returned by login and register
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    /// Bearer token
    #[serde(alias = "token")]
    pub access_token: String,
    /// The authenticated user
    pub user: User,
}
