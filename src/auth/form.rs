//! Login and signup forms
//!
//! A form shows at most one alert: the backend's message for a rejected
//! submit, or a generic fallback. Submitting again clears it first.

use crate::api::Backend;
use crate::models::{AuthPayload, LoginRequest, RegisterRequest};

use super::{Session, SessionStore};

/// Which endpoint the form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `POST /auth/login`
    Login,
    /// `POST /auth/register`
    Signup,
}

impl AuthMode {
    const fn fallback(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }
}

/// Credentials entered by the user
#[derive(Debug, Clone)]
pub struct AuthForm {
    /// Login or signup
    pub mode: AuthMode,
    /// Username
    pub username: String,
    /// Email (signup only)
    pub email: String,
    /// Password
    pub password: String,
    alert: Option<String>,
}

impl AuthForm {
    /// A login form
    pub fn login(username: &str, password: &str) -> Self {
        Self {
            mode: AuthMode::Login,
            username: username.to_string(),
            email: String::new(),
            password: password.to_string(),
            alert: None,
        }
    }

    /// A signup form
    pub fn signup(username: &str, email: &str, password: &str) -> Self {
        Self {
            mode: AuthMode::Signup,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            alert: None,
        }
    }

    /// The visible alert, if the last submit failed
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Submit the form; on success the session is logged in and persisted
    pub async fn submit<B: Backend>(
        &mut self,
        api: &B,
        store: &SessionStore,
        session: &mut Session,
    ) -> bool {
        self.alert = None;

        let result = match self.mode {
            AuthMode::Login => {
                api.login(&LoginRequest {
                    username: self.username.clone(),
                    password: self.password.clone(),
                })
                .await
            }
            AuthMode::Signup => {
                api.register(&RegisterRequest {
                    username: self.username.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                })
                .await
            }
        };

        match result {
            Ok(AuthPayload { access_token, user }) => {
                match session.login(store, &access_token, user) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!("Failed to persist session: {e:#}");
                        self.alert = Some(format!("Could not save session: {e}"));
                        false
                    }
                }
            }
            Err(e) => {
                tracing::warn!("{:?} failed: {e}", self.mode);
                self.alert = Some(
                    e.backend_message()
                        .unwrap_or_else(|| self.mode.fallback())
                        .to_string(),
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.enc"));
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");

        let mut session = Session::anonymous();
        let mut form = AuthForm::login("alice", "pw");
        assert!(form.submit(&api, &store, &mut session).await);
        assert!(form.alert().is_none());
        assert_eq!(session.viewer_id().unwrap(), "u1");
        assert_eq!(Session::restore(&store), session);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_one_backend_alert() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.enc"));
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");

        let mut session = Session::anonymous();
        let mut form = AuthForm::login("alice", "wrong");
        assert!(!form.submit(&api, &store, &mut session).await);
        assert_eq!(form.alert(), Some("Invalid credentials"));
        assert!(!session.is_authenticated());

        form.password = "pw".to_string();
        assert!(form.submit(&api, &store, &mut session).await);
        assert!(form.alert().is_none());
    }

    #[tokio::test]
    async fn test_signup_fallback_alert() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.enc"));
        let api = FakeBackend::new();
        api.fail("register");

        let mut session = Session::anonymous();
        let mut form = AuthForm::signup("carol", "carol@example.com", "pw");
        assert!(!form.submit(&api, &store, &mut session).await);
        assert_eq!(form.alert(), Some("Signup failed"));
    }

    #[tokio::test]
    async fn test_signup_logs_in() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.enc"));
        let api = FakeBackend::new();

        let mut session = Session::anonymous();
        let mut form = AuthForm::signup("carol", "carol@example.com", "pw");
        assert!(form.submit(&api, &store, &mut session).await);
        assert_eq!(session.user().unwrap().username, "carol");
    }
}
