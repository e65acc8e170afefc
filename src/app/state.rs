//! Application state

use crate::activity::ActivityWall;
use crate::api::{ApiResult, Backend};
use crate::auth::{AuthForm, Session, SessionStore};
use crate::bookmarks::BookmarksView;
use crate::config::Config;
use crate::feed::FeedController;
use crate::render;
use crate::social::{PeopleDirectory, ProfileView};

use super::commands::{Command, HELP, View};

/// Everything the shell shows, plus the session
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Durable session storage
    store: SessionStore,
    /// Current session
    pub session: Session,
    /// Current view
    pub view: View,

    /// Post list
    pub feed: FeedController,
    /// Saved posts
    pub bookmarks: BookmarksView,
    /// People directory (needs a signed-in user)
    pub people: Option<PeopleDirectory>,
    /// Profile tabs (needs a signed-in user)
    pub profile: Option<ProfileView>,
    /// Activity wall
    pub activity: ActivityWall,

    /// Status message (bottom line)
    pub status: String,
    /// Whether to quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new app state
    pub fn new(config: Config, store: SessionStore, session: Session) -> Self {
        Self {
            config,
            store,
            session,
            view: View::Feed,
            feed: FeedController::new(),
            bookmarks: BookmarksView::new(),
            people: None,
            profile: None,
            activity: ActivityWall::new(),
            status: String::new(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Surface the outcome of a view operation
    ///
    /// Failures are logged and shown on the status line; view state is left as
    /// the operation left it (unchanged, for every view operation).
    fn report(&mut self, action: &str, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{action} failed: {e}");
                self.set_status(format!("❌ {action} failed: {}", e.message()));
                false
            }
        }
    }

    fn require_viewer(&mut self) -> bool {
        if self.session.is_authenticated() {
            true
        } else {
            self.set_status("Please log in first: login <username>");
            false
        }
    }

    /// Switch to a view and load it
    pub async fn show<B: Backend>(&mut self, api: &B, view: View) {
        if view.needs_viewer() && !self.require_viewer() {
            return;
        }
        self.view = view;
        self.refresh(api).await;
    }

    /// Reload the current view from the backend
    pub async fn refresh<B: Backend>(&mut self, api: &B) {
        let result = match self.view {
            View::Feed => self.feed.refresh(api, &self.session).await,
            View::Bookmarks => self.bookmarks.refresh(api, &self.session).await,
            View::Activity => self.activity.refresh(api, &self.session).await,
            View::People => {
                if self.people.is_none() {
                    self.people = PeopleDirectory::for_viewer(&self.session).ok();
                }
                match self.people.as_mut() {
                    Some(people) => people.refresh(api, &self.session).await,
                    None => return,
                }
            }
            View::Profile => {
                if self.profile.is_none() {
                    self.profile = ProfileView::for_viewer(&self.session).ok();
                }
                match self.profile.as_mut() {
                    Some(profile) => profile.refresh(api, &self.session).await,
                    None => return,
                }
            }
        };
        let action = format!("Loading {}", self.view.name().to_lowercase());
        self.report(&action, result);
    }

    /// Submit a login or signup form; on success the feed is loaded
    pub async fn submit_auth<B: Backend>(&mut self, api: &B, form: &mut AuthForm) -> bool {
        if !form.submit(api, &self.store, &mut self.session).await {
            if let Some(alert) = form.alert() {
                self.set_status(format!("❌ {alert}"));
            }
            return false;
        }

        self.reset_views();
        let name = self
            .session
            .user()
            .map(|u| u.username.clone())
            .unwrap_or_default();
        self.set_status(format!("✓ Logged in as @{name}"));
        self.view = View::Feed;
        self.refresh(api).await;
        true
    }

    /// Clear the session and every view
    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout(&self.store) {
            tracing::warn!("Failed to clear stored session: {e:#}");
        }
        self.reset_views();
        self.view = View::Feed;
        self.set_status("Logged out");
    }

    fn reset_views(&mut self) {
        self.feed = FeedController::new();
        self.bookmarks = BookmarksView::new();
        self.people = None;
        self.profile = None;
        self.activity = ActivityWall::new();
    }

    fn feed_post_id(&mut self, n: usize) -> Option<String> {
        if self.view != View::Feed {
            self.set_status(format!("No post #{n} here; open 'feed' first"));
            return None;
        }
        let id = self
            .feed
            .entries()
            .get(n.wrapping_sub(1))
            .map(|e| e.post.id.clone());
        if id.is_none() {
            self.set_status(format!("No post #{n} in the feed"));
        }
        id
    }

    fn person_id(&mut self, n: usize) -> Option<String> {
        let id = self
            .people
            .as_ref()
            .filter(|_| self.view == View::People)
            .and_then(|people| people.visible().nth(n.wrapping_sub(1)).map(|u| u.id.clone()));
        if id.is_none() {
            self.set_status(format!("No person #{n}; open 'people' first"));
        }
        id
    }

    /// Execute a command (login and signup go through [`AppState::submit_auth`])
    pub async fn handle<B: Backend>(&mut self, api: &B, command: Command) {
        self.clear_status();

        match command {
            Command::Show(view) => self.show(api, view).await,
            Command::Refresh => self.refresh(api).await,
            Command::Help => self.set_status(HELP),
            Command::Quit => self.should_quit = true,
            Command::Logout => self.logout(),
            Command::Login { .. } | Command::Signup { .. } => {
                self.set_status("Login and signup need a password prompt");
            }
            Command::Tab => {
                if self.view == View::Profile
                    && let Some(profile) = self.profile.as_mut()
                {
                    profile.tab = profile.tab.toggled();
                } else {
                    self.set_status("Open 'profile' first");
                }
            }

            Command::Post(content) => {
                if !self.require_viewer() {
                    return;
                }
                self.view = View::Feed;
                self.feed.compose = content;
                let result = self.feed.create_post(api, &self.session).await;
                match result {
                    Ok(true) => self.set_status("✓ Posted"),
                    Ok(false) => self.set_status("Nothing to post"),
                    Err(_) => {}
                }
                self.report("Posting", result.map(|_| ()));
            }
            Command::Like(n) => {
                let Some(id) = self.feed_post_id(n) else { return };
                let result = self.feed.like(api, &self.session, &id).await;
                self.report("Liking", result);
            }
            Command::Save(n) if self.view == View::Bookmarks => {
                let id = self.bookmarks.rows().nth(n.wrapping_sub(1)).map(|(_, p)| p.id.clone());
                let Some(id) = id else {
                    self.set_status(format!("No saved post #{n}"));
                    return;
                };
                let result = self.bookmarks.toggle(api, &self.session, &id).await;
                if self.report("Removing bookmark", result) {
                    self.set_status("Removed from saved");
                }
            }
            Command::Save(n) => {
                let Some(id) = self.feed_post_id(n) else { return };
                let result = self.feed.bookmark(api, &self.session, &id).await;
                if self.report("Saving", result) {
                    self.set_status("Toggled bookmark");
                }
            }
            Command::Comments(n) => {
                let Some(id) = self.feed_post_id(n) else { return };
                let result = self.feed.toggle_comments(api, &self.session, &id).await;
                self.report("Loading comments", result);
            }
            Command::Reply(n, content) => {
                let Some(id) = self.feed_post_id(n) else { return };
                self.feed.set_draft(&id, &content);
                let result = self.feed.post_comment(api, &self.session, &id).await;
                self.report("Commenting", result.map(|_| ()));
            }
            Command::Follow(n) => {
                let Some(id) = self.person_id(n) else { return };
                if let Some(people) = self.people.as_mut() {
                    let result = people.follow(api, &self.session, &id).await;
                    self.report("Following", result);
                }
            }
            Command::Unfollow(n) => {
                let Some(id) = self.person_id(n) else { return };
                if let Some(people) = self.people.as_mut() {
                    let result = people.unfollow(api, &self.session, &id).await;
                    self.report("Unfollowing", result);
                }
            }
        }
    }

    /// Render the current view and status line
    pub fn render(&self) -> String {
        let width = self.config.wrap_width;
        let body = match self.view {
            View::Feed => render::feed(&self.feed, width),
            View::Bookmarks => render::bookmarks(&self.bookmarks, width),
            View::Activity => render::activity(&self.activity),
            View::People => self
                .people
                .as_ref()
                .map(render::people)
                .unwrap_or_default(),
            View::Profile => {
                let username = self
                    .session
                    .user()
                    .map(|u| u.username.as_str())
                    .unwrap_or_default();
                self.profile
                    .as_ref()
                    .map(|p| render::profile(p, username))
                    .unwrap_or_default()
            }
        };

        let mut out = format!("── {} ──\n{body}", self.view.name());
        if !self.status.is_empty() {
            out.push('\n');
            out.push_str(&self.status);
            out.push('\n');
        }
        out
    }
}
