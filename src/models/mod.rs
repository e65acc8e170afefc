//! Data models for Murmur
//!
//! Field names follow the backend's JSON (`snake_case`); everything the
//! backend may omit is optional so a partial payload still renders.

mod activity;
mod bookmark;
mod post;
mod timestamp;
mod user;

pub use activity::{ActionType, Activity};
pub use bookmark::BookmarkItem;
pub use post::{Comment, ContentRequest, Post};
pub use user::{AuthPayload, Author, LoginRequest, ProfilePicture, RegisterRequest, SimpleUser, User};
