//! In-memory backend used by view tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::Utc;

use crate::api::{ApiResult, Backend, RequestError};
use crate::auth::Session;
use crate::models::{
    ActionType, Activity, AuthPayload, Author, BookmarkItem, Comment, LoginRequest, Post,
    RegisterRequest, SimpleUser, User,
};

#[derive(Default)]
struct State {
    users: Vec<SimpleUser>,
    passwords: HashMap<String, String>,
    /// Newest first, as the backend orders them
    posts: Vec<Post>,
    comments: HashMap<String, Vec<Comment>>,
    likes: HashSet<(String, String)>,
    /// (user, post), in the order they were saved
    bookmarks: Vec<(String, String)>,
    /// (follower, followed), in the order they were created
    follows: Vec<(String, String)>,
    activity: Vec<Activity>,
    calls: Vec<String>,
    failing: HashSet<String>,
    next_id: u32,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn user(&self, id: &str) -> Option<&SimpleUser> {
        self.users.iter().find(|u| u.id == id)
    }

    fn record(&mut self, op: &str) -> ApiResult<()> {
        self.calls.push(op.to_string());
        if self.failing.contains(op) {
            return Err(RequestError::Payload("simulated failure".to_string()));
        }
        Ok(())
    }

    fn require_post(&self, post_id: &str) -> ApiResult<()> {
        if self.posts.iter().any(|p| p.id == post_id) {
            Ok(())
        } else {
            Err(RequestError::rejected(404, "Post not found"))
        }
    }

    fn log(&mut self, actor: &str, action_type: ActionType, target: &str, message: String) {
        let id = self.next_id("a");
        self.activity.insert(
            0,
            Activity {
                id,
                actor_id: actor.to_string(),
                action_type,
                target_id: Some(target.to_string()),
                message,
                created_at: Some(Utc::now()),
            },
        );
    }
}

/// A backend that keeps everything in memory and records each call
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&self, id: &str, username: &str, password: &str) -> SimpleUser {
        let mut state = self.state.lock().unwrap();
        let user = SimpleUser {
            id: id.to_string(),
            username: username.to_string(),
            email: Some(format!("{username}@example.com")),
            profile_picture: None,
        };
        state.users.push(user.clone());
        state
            .passwords
            .insert(username.to_string(), password.to_string());
        user
    }

    /// A logged-in session for an existing account
    pub fn session_for(&self, id: &str) -> Session {
        let state = self.state.lock().unwrap();
        let user = state.user(id).expect("unknown account");
        Session::new(
            &format!("token-{id}"),
            User {
                id: user.id.clone(),
                username: user.username.clone(),
                email: user.email.clone(),
            },
        )
    }

    /// Insert a post directly, as if another client created it
    pub fn seed_post(&self, owner: &str, content: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("p");
        let mut post = Post::new(&id);
        post.content = content.to_string();
        post.created_at = Some(Utc::now());
        post.original_post_owner = state.user(owner).map(|u| Author {
            username: u.username.clone(),
            profile_picture: None,
        });
        state.posts.insert(0, post);
        id
    }

    pub fn seed_comment(&self, post_id: &str, content: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("c");
        state
            .comments
            .entry(post_id.to_string())
            .or_default()
            .push(Comment {
                id,
                content: content.to_string(),
                created_at: Some(Utc::now()),
                user: Author {
                    username: "someone".to_string(),
                    profile_picture: None,
                },
            });
    }

    pub fn delete_post(&self, post_id: &str) {
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|p| p.id != post_id);
    }

    pub fn is_liked(&self, user: &str, post_id: &str) -> bool {
        let state = self.state.lock().unwrap();
        state
            .likes
            .contains(&(user.to_string(), post_id.to_string()))
    }

    /// Make every later call of `op` fail
    pub fn fail(&self, op: &str) {
        self.state.lock().unwrap().failing.insert(op.to_string());
    }

    pub fn recover(&self, op: &str) {
        self.state.lock().unwrap().failing.remove(op);
    }

    /// Number of calls made to `op`
    pub fn calls(&self, op: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.calls.iter().filter(|c| *c == op).count()
    }
}

impl Backend for FakeBackend {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthPayload> {
        self.state.lock().unwrap().record("register")?;
        let id = {
            let mut state = self.state.lock().unwrap();
            state.next_id("u")
        };
        let user = self.add_account(&id, &request.username, &request.password);
        Ok(AuthPayload {
            access_token: format!("token-{id}"),
            user: User {
                id: user.id,
                username: user.username,
                email: Some(request.email.clone()),
            },
        })
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthPayload> {
        let mut state = self.state.lock().unwrap();
        state.record("login")?;
        if state.passwords.get(&request.username) != Some(&request.password) {
            return Err(RequestError::rejected(401, "Invalid credentials"));
        }
        let user = state
            .users
            .iter()
            .find(|u| u.username == request.username)
            .cloned()
            .ok_or(RequestError::NotAuthenticated)?;
        Ok(AuthPayload {
            access_token: format!("token-{}", user.id),
            user: User {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        })
    }

    async fn posts(&self, _session: &Session) -> ApiResult<Vec<Post>> {
        let mut state = self.state.lock().unwrap();
        state.record("posts")?;
        Ok(state.posts.clone())
    }

    async fn create_post(&self, session: &Session, content: &str) -> ApiResult<()> {
        let viewer = session.viewer_id()?.to_string();
        self.state.lock().unwrap().record("create_post")?;
        let id = self.seed_post(&viewer, content);
        let mut state = self.state.lock().unwrap();
        state.log(&viewer, ActionType::Post, &id, "created a post".to_string());
        Ok(())
    }

    async fn like(&self, session: &Session, post_id: &str) -> ApiResult<()> {
        let viewer = session.viewer_id()?.to_string();
        let mut state = self.state.lock().unwrap();
        state.record("like")?;
        state.require_post(post_id)?;
        let key = (viewer, post_id.to_string());
        if !state.likes.remove(&key) {
            state.likes.insert(key);
        }
        Ok(())
    }

    async fn bookmark(&self, session: &Session, post_id: &str) -> ApiResult<()> {
        let viewer = session.viewer_id()?.to_string();
        let mut state = self.state.lock().unwrap();
        state.record("bookmark")?;
        let key = (viewer, post_id.to_string());
        if let Some(idx) = state.bookmarks.iter().position(|b| *b == key) {
            state.bookmarks.remove(idx);
        } else {
            state.require_post(post_id)?;
            state.bookmarks.push(key);
        }
        Ok(())
    }

    async fn comments(&self, _session: &Session, post_id: &str) -> ApiResult<Vec<Comment>> {
        let mut state = self.state.lock().unwrap();
        state.record("comments")?;
        state.require_post(post_id)?;
        Ok(state.comments.get(post_id).cloned().unwrap_or_default())
    }

    async fn comment(&self, session: &Session, post_id: &str, content: &str) -> ApiResult<Comment> {
        let viewer = session.viewer_id()?.to_string();
        let mut state = self.state.lock().unwrap();
        state.record("comment")?;
        state.require_post(post_id)?;
        let id = state.next_id("c");
        let username = state
            .user(&viewer)
            .map(|u| u.username.clone())
            .unwrap_or_default();
        let comment = Comment {
            id,
            content: content.to_string(),
            created_at: Some(Utc::now()),
            user: Author {
                username,
                profile_picture: None,
            },
        };
        state
            .comments
            .entry(post_id.to_string())
            .or_default()
            .push(comment.clone());
        state.log(&viewer, ActionType::Comment, post_id, "commented".to_string());
        Ok(comment)
    }

    async fn activity_feed(&self, _session: &Session) -> ApiResult<Vec<Activity>> {
        let mut state = self.state.lock().unwrap();
        state.record("activity_feed")?;
        Ok(state.activity.clone())
    }

    async fn users(&self, _session: &Session) -> ApiResult<Vec<SimpleUser>> {
        let mut state = self.state.lock().unwrap();
        state.record("users")?;
        Ok(state.users.clone())
    }

    async fn followers(&self, _session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>> {
        let mut state = self.state.lock().unwrap();
        state.record("followers")?;
        Ok(state
            .follows
            .iter()
            .filter(|(_, to)| to == user_id)
            .filter_map(|(from, _)| state.user(from).cloned())
            .collect())
    }

    async fn following(&self, _session: &Session, user_id: &str) -> ApiResult<Vec<SimpleUser>> {
        let mut state = self.state.lock().unwrap();
        state.record("following")?;
        Ok(state
            .follows
            .iter()
            .filter(|(from, _)| from == user_id)
            .filter_map(|(_, to)| state.user(to).cloned())
            .collect())
    }

    async fn follow(&self, session: &Session, user_id: &str) -> ApiResult<()> {
        let viewer = session.viewer_id()?.to_string();
        let mut state = self.state.lock().unwrap();
        state.record("follow")?;
        let edge = (viewer.clone(), user_id.to_string());
        if !state.follows.contains(&edge) {
            state.follows.push(edge);
            state.log(&viewer, ActionType::Follow, user_id, "followed".to_string());
        }
        Ok(())
    }

    async fn unfollow(&self, session: &Session, user_id: &str) -> ApiResult<()> {
        let viewer = session.viewer_id()?.to_string();
        let mut state = self.state.lock().unwrap();
        state.record("unfollow")?;
        state
            .follows
            .retain(|edge| *edge != (viewer.clone(), user_id.to_string()));
        Ok(())
    }

    async fn bookmarks(&self, _session: &Session, user_id: &str) -> ApiResult<Vec<BookmarkItem>> {
        let mut state = self.state.lock().unwrap();
        state.record("bookmarks")?;
        Ok(state
            .bookmarks
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .enumerate()
            .map(|(idx, (owner, post_id))| BookmarkItem {
                id: format!("b{idx}"),
                post_id: post_id.clone(),
                user_id: owner.clone(),
                created_at: Some(Utc::now()),
                post: state.posts.iter().find(|p| p.id == *post_id).cloned(),
            })
            .collect())
    }
}
