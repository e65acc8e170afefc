//! Session context
//!
//! A [`Session`] is created at start-up from the durable store, replaced on
//! login and cleared on logout. It is passed explicitly to every backend call.

use anyhow::Result;

use crate::api::RequestError;
use crate::models::User;

use super::store::{SessionStore, TOKEN_KEY, USER_KEY};

/// Current token and identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// A session without credentials
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An in-memory session (not persisted)
    pub fn new(token: &str, user: User) -> Self {
        Self {
            token: Some(token.to_string()),
            user: Some(user),
        }
    }

    /// Restore the session saved in `store`
    ///
    /// A token whose identity is missing or unreadable yields a session with a
    /// token and no user; deciding what to do about that is up to the caller.
    /// A store that cannot be read at all restores as anonymous, and the next
    /// login overwrites it.
    pub fn restore(store: &SessionStore) -> Self {
        let mut entries = match store.entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session store: {e:#}");
                return Self::anonymous();
            }
        };

        let token = entries.remove(TOKEN_KEY);
        let user = match (&token, entries.remove(USER_KEY)) {
            (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Stored identity is unreadable: {e}");
                    None
                }
            },
            _ => None,
        };
        Self { token, user }
    }

    /// Remove any stored token and identity without restoring them first
    pub fn forget(store: &SessionStore) -> Result<()> {
        store.remove(&[TOKEN_KEY, USER_KEY])
    }

    /// Store the token durably and set the identity, replacing any previous login
    pub fn login(&mut self, store: &SessionStore, token: &str, user: User) -> Result<()> {
        store.set_many(&[
            (TOKEN_KEY, token.to_string()),
            (USER_KEY, serde_json::to_string(&user)?),
        ])?;
        self.token = Some(token.to_string());
        self.user = Some(user);
        Ok(())
    }

    /// Clear the durable token and the identity
    pub fn logout(&mut self, store: &SessionStore) -> Result<()> {
        self.token = None;
        self.user = None;
        Self::forget(store)
    }

    /// Bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Signed-in user, if known
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether both a token and an identity are present
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Whether a token was restored without a usable identity
    pub const fn needs_login(&self) -> bool {
        self.token.is_some() && self.user.is_none()
    }

    /// The viewer's user ID, required by per-user endpoints
    pub fn viewer_id(&self) -> Result<&str, RequestError> {
        self.user
            .as_ref()
            .map(|user| user.id.as_str())
            .ok_or(RequestError::NotAuthenticated)
    }
}
