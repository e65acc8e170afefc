//! # Murmur
//!
//! A terminal client for the murmur social network.
//!
//! ## Overview
//!
//! Murmur lets you read the feed, post, like, comment, bookmark and follow
//! people from your terminal. All business logic lives in the backend; this
//! crate holds the client-side view state and talks REST.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App shell                           │
//! │       Parses commands, owns the views and the session       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!      ┌──────────────┬────────┴───────┬──────────────┐
//!      ▼              ▼                ▼              ▼
//! ┌──────────┐  ┌───────────┐  ┌──────────────┐  ┌──────────┐
//! │   Feed   │  │ Bookmarks │  │    Social    │  │ Activity │
//! │ comments │  │  toggle + │  │ follow graph │  │   wall   │
//! │  panels  │  │  refetch  │  │   people     │  │          │
//! └──────────┘  └───────────┘  └──────────────┘  └──────────┘
//!      └──────────────┴────────┬───────┴──────────────┘
//!                              ▼
//!            ┌──────────────────────────────────┐
//!            │   API (Backend trait, ApiClient)  │◀── Session (token)
//!            └──────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: REST client, response envelope, request errors
//! - [`app`]: Interactive shell
//! - [`auth`]: Session context, encrypted session storage, auth forms
//! - [`feed`]: Post list and per-post comment panels
//! - [`social`]: Follow graph, people and profile views
//! - [`bookmarks`]: Saved posts
//! - [`activity`]: Activity wall
//! - [`render`]: Plain-text rendering
//! - [`config`]: Configuration management
//! - [`models`]: Data models (Post, Comment, User, ...)
//!
//! ## Example
//!
//! ```no_run
//! use murmur::api::ApiClient;
//! use murmur::auth::Session;
//! use murmur::feed::FeedController;
//!
//! # async fn demo(session: Session) -> anyhow::Result<()> {
//! let api = ApiClient::new("http://localhost:5001");
//! let mut feed = FeedController::new();
//! feed.refresh(&api, &session).await?;
//! println!("{}", murmur::render::feed(&feed, 72));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::future_not_send)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]

pub mod activity;
pub mod api;
pub mod app;
pub mod auth;
pub mod bookmarks;
pub mod config;
pub mod feed;
pub mod models;
pub mod paths;
pub mod render;
pub mod social;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use api::{ApiClient, Backend, RequestError};
pub use app::AppState;
pub use auth::{Session, SessionStore};
pub use config::Config;
pub use models::{Activity, BookmarkItem, Comment, Post, SimpleUser, User};

/// ASCII logo for the application
pub const LOGO: &str = r"
  _ __ ___  _   _ _ __ _ __ ___  _   _ _ __
 | '_ ` _ \| | | | '__| '_ ` _ \| | | | '__|
 | | | | | | |_| | |  | | | | | | |_| | |
 |_| |_| |_|\__,_|_|  |_| |_| |_|\__,_|_|
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
