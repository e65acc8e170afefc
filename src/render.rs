//! Plain-text rendering of the views
//!
//! Lists are rendered in the order the views hold them and numbered from 1;
//! the shell uses those numbers to address items.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::activity::ActivityWall;
use crate::bookmarks::BookmarksView;
use crate::feed::{FeedController, FeedEntry};
use crate::models::{Comment, Post, SimpleUser};
use crate::social::{PeopleDirectory, ProfileTab, ProfileView};

/// Relative time string (e.g., "5m", "2h", "3d")
pub fn relative_time(created_at: Option<DateTime<Utc>>) -> String {
    relative_time_at(created_at, Utc::now())
}

fn relative_time_at(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created_at) = created_at else {
        return "?".to_string();
    };
    let duration = now.signed_duration_since(created_at);

    if duration.num_seconds() < 60 {
        format!("{}s", duration.num_seconds().max(0))
    } else if duration.num_minutes() < 60 {
        format!("{}m", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d", duration.num_days())
    } else {
        created_at.format("%b %d").to_string()
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single post with its media and any reposted original
pub fn post(post: &Post, width: usize) -> String {
    let mut out = format!("@{} · {}\n", post.owner_name(), relative_time(post.created_at));
    if !post.content.is_empty() {
        out.push_str(&textwrap::fill(&post.content, width.max(20)));
        out.push('\n');
    }
    if let Some(image) = &post.image {
        let _ = writeln!(out, "[image] {image}");
    }
    if let Some(video) = &post.video {
        let _ = writeln!(out, "[video] {video}");
    }
    if let Some(original) = &post.original_post {
        let nested = self::post(original, width.saturating_sub(2));
        out.push_str(&indent(&nested, "│ "));
        out.push('\n');
    }
    out
}

fn comment(comment: &Comment) -> String {
    format!("  @{}: {}", comment.user.username, comment.content)
}

fn feed_entry(number: usize, entry: &FeedEntry, width: usize) -> String {
    let mut out = format!("[{number}] {}", post(&entry.post, width));
    let _ = writeln!(
        out,
        "    ♥ like   💬 comments ({})   🔖 save",
        entry.post.comment_count()
    );

    if entry.panel.is_expanded() {
        match entry.post.comments.as_deref() {
            Some(comments) if !comments.is_empty() => {
                for c in comments {
                    out.push_str(&comment(c));
                    out.push('\n');
                }
            }
            _ => out.push_str("  No comments yet. Be the first!\n"),
        }
        if !entry.panel.draft.is_empty() {
            let _ = writeln!(out, "  > {}", entry.panel.draft);
        }
    }
    out
}

/// The post list, with open comment panels
pub fn feed(feed: &FeedController, width: usize) -> String {
    if feed.entries().is_empty() {
        return "No posts yet.\n".to_string();
    }
    feed.entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| feed_entry(idx + 1, entry, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Saved posts; bookmarks whose post was deleted produce no row
pub fn bookmarks(view: &BookmarksView, width: usize) -> String {
    let rows: Vec<String> = view
        .rows()
        .enumerate()
        .map(|(idx, (_, saved))| format!("[{}] {}    🔖 saved\n", idx + 1, post(saved, width)))
        .collect();

    if rows.is_empty() {
        "You haven't saved any posts yet.\n".to_string()
    } else {
        rows.join("\n")
    }
}

fn user_line(number: usize, user: &SimpleUser) -> String {
    let mut line = format!("[{number}] @{}", user.username);
    if let Some(email) = &user.email {
        let _ = write!(line, "  <{email}>");
    }
    line
}

/// The people directory, with follow affordances
pub fn people(directory: &PeopleDirectory) -> String {
    let lines: Vec<String> = directory
        .visible()
        .enumerate()
        .map(|(idx, user)| {
            let action = if directory.is_following(&user.id) {
                "Unfollow"
            } else {
                "Follow"
            };
            format!("{}  [{action}]", user_line(idx + 1, user))
        })
        .collect();

    if lines.is_empty() {
        "No other users found\n".to_string()
    } else {
        lines.join("\n") + "\n"
    }
}

/// The profile tabs and the selected list
pub fn profile(view: &ProfileView, username: &str) -> String {
    let (followers, following) = view.counts();
    let mark = |tab: ProfileTab| if view.tab == tab { "*" } else { " " };

    let mut out = format!(
        "@{username}\n{}Followers ({followers})  {}Following ({following})\n",
        mark(ProfileTab::Followers),
        mark(ProfileTab::Following),
    );

    let users = view.displayed();
    if users.is_empty() {
        let _ = writeln!(out, "No {} yet", view.tab.name());
    } else {
        for (idx, user) in users.iter().enumerate() {
            out.push_str(&user_line(idx + 1, user));
            out.push('\n');
        }
    }
    out
}

/// The activity wall
pub fn activity(wall: &ActivityWall) -> String {
    if wall.activities().is_empty() {
        return "No activity yet.\n".to_string();
    }
    wall.activities()
        .iter()
        .map(|a| {
            format!(
                "• {:<8} {} · {}\n",
                a.action_type.label(),
                a.message,
                relative_time(a.created_at)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::testing::FakeBackend;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time_at(Some(now - Duration::seconds(5)), now), "5s");
        assert_eq!(relative_time_at(Some(now - Duration::minutes(5)), now), "5m");
        assert_eq!(relative_time_at(Some(now - Duration::hours(3)), now), "3h");
        assert_eq!(relative_time_at(Some(now - Duration::days(2)), now), "2d");
        assert_eq!(relative_time_at(Some(now - Duration::days(30)), now), "May 11");
        assert_eq!(relative_time_at(None, now), "?");
    }

    #[test]
    fn test_repost_is_nested() {
        let mut original = Post::new("p1");
        original.content = "original text".to_string();
        let mut repost = Post::new("p2");
        repost.content = "look".to_string();
        repost.original_post = Some(Box::new(original));

        let text = post(&repost, 72);
        assert!(text.starts_with("@Unknown User"));
        assert!(text.contains("│ original text"));
    }

    #[tokio::test]
    async fn test_feed_renders_backend_order() {
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");
        let session = api.session_for("u1");
        api.seed_post("u1", "older");
        api.seed_post("u1", "newer");

        let mut controller = FeedController::new();
        controller.refresh(&api, &session).await.unwrap();
        let text = feed(&controller, 72);

        let newer = text.find("newer").unwrap();
        let older = text.find("older").unwrap();
        assert!(newer < older);
        assert!(text.starts_with("[1] @alice"));
    }

    #[tokio::test]
    async fn test_single_post_feed() {
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");
        let session = api.session_for("u1");

        let mut controller = FeedController::new();
        controller.compose = "hello".to_string();
        controller.create_post(&api, &session).await.unwrap();
        let text = feed(&controller, 72);

        assert_eq!(text.matches("hello").count(), 1);
        assert!(!text.contains("[2]"));
    }

    #[tokio::test]
    async fn test_open_panel_without_comments() {
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");
        let session = api.session_for("u1");
        let id = api.seed_post("u1", "quiet");

        let mut controller = FeedController::new();
        controller.refresh(&api, &session).await.unwrap();
        controller.toggle_comments(&api, &session, &id).await.unwrap();

        assert!(feed(&controller, 72).contains("No comments yet. Be the first!"));
    }

    #[tokio::test]
    async fn test_bookmark_with_null_post_renders_nothing() {
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");
        let session: Session = api.session_for("u1");
        let id = api.seed_post("u1", "doomed");
        crate::api::Backend::bookmark(&api, &session, &id).await.unwrap();
        api.delete_post(&id);

        let mut view = BookmarksView::new();
        view.refresh(&api, &session).await.unwrap();
        assert_eq!(view.items().len(), 1);

        let text = bookmarks(&view, 72);
        assert!(!text.contains("[1]"));
        assert_eq!(text, "You haven't saved any posts yet.\n");
    }

    #[tokio::test]
    async fn test_people_never_shows_viewer() {
        let api = FakeBackend::new();
        api.add_account("u1", "alice", "pw");
        api.add_account("u2", "bob", "pw");
        let session = api.session_for("u1");

        let mut directory = PeopleDirectory::for_viewer(&session).unwrap();
        directory.refresh(&api, &session).await.unwrap();
        let text = people(&directory);

        assert!(!text.contains("@alice"));
        assert!(text.contains("[1] @bob  <bob@example.com>  [Follow]"));
    }
}
