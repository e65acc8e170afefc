//! Shell command parsing

/// Which list the shell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Post list
    #[default]
    Feed,
    /// Saved posts
    Bookmarks,
    /// All users with follow buttons
    People,
    /// Followers / following tabs
    Profile,
    /// Activity wall
    Activity,
}

impl View {
    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Bookmarks => "Saved Posts",
            Self::People => "People",
            Self::Profile => "Profile",
            Self::Activity => "Activity Wall",
        }
    }

    /// Whether the view needs a signed-in user
    pub const fn needs_viewer(&self) -> bool {
        matches!(self, Self::Bookmarks | Self::People | Self::Profile)
    }
}

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a view and load it
    Show(View),
    /// Reload the current view
    Refresh,
    /// Publish a post
    Post(String),
    /// Like the n-th post
    Like(usize),
    /// Toggle the bookmark of the n-th post (feed) or row (saved posts)
    Save(usize),
    /// Open or close the n-th post's comments
    Comments(usize),
    /// Comment on the n-th post
    Reply(usize, String),
    /// Follow the n-th person
    Follow(usize),
    /// Unfollow the n-th person
    Unfollow(usize),
    /// Switch profile tab
    Tab,
    /// Log in (password is prompted)
    Login {
        /// Account name
        username: String,
    },
    /// Create an account (password is prompted)
    Signup {
        /// Account name
        username: String,
        /// Email address
        email: String,
    },
    /// Log out
    Logout,
    /// Show help
    Help,
    /// Leave the shell
    Quit,
}

fn number(arg: Option<&str>, what: &str) -> Result<usize, String> {
    arg.and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Expected a {what} number"))
}

fn text(rest: &str, what: &str) -> Result<String, String> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(format!("Missing {what}"))
    } else {
        Ok(rest.to_string())
    }
}

/// Parse one input line; `Ok(None)` for a blank line
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let mut args = rest.split_whitespace();

    let command = match word.to_lowercase().as_str() {
        "feed" | "home" => Command::Show(View::Feed),
        "saved" | "bookmarks" => Command::Show(View::Bookmarks),
        "people" | "users" => Command::Show(View::People),
        "profile" | "me" => Command::Show(View::Profile),
        "activity" | "wall" => Command::Show(View::Activity),
        "r" | "refresh" => Command::Refresh,
        "p" | "post" => Command::Post(text(rest, "post content")?),
        "l" | "like" => Command::Like(number(args.next(), "post")?),
        "s" | "save" | "unsave" => Command::Save(number(args.next(), "post")?),
        "c" | "comments" => Command::Comments(number(args.next(), "post")?),
        "reply" | "comment" => {
            let n = number(args.next(), "post")?;
            let body = rest.trim_start().split_once(char::is_whitespace).map_or("", |(_, b)| b);
            Command::Reply(n, text(body, "comment")?)
        }
        "follow" => Command::Follow(number(args.next(), "person")?),
        "unfollow" => Command::Unfollow(number(args.next(), "person")?),
        "tab" => Command::Tab,
        "login" => Command::Login {
            username: args.next().ok_or("Usage: login <username>")?.to_string(),
        },
        "signup" | "register" => {
            let usage = "Usage: signup <username> <email>";
            Command::Signup {
                username: args.next().ok_or(usage)?.to_string(),
                email: args.next().ok_or(usage)?.to_string(),
            }
        }
        "logout" => Command::Logout,
        "?" | "h" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command: {other} (try 'help')")),
    };

    Ok(Some(command))
}

/// Shell help text
pub const HELP: &str = "\
VIEWS
    feed | saved | people | profile | activity
ACTIONS
    r                     Reload the current view
    post <text>           Publish a post
    like <n>              Like / unlike post n
    save <n>              Bookmark post n (in saved: remove row n)
    c <n>                 Open / close comments of post n
    reply <n> <text>      Comment on post n
    follow <n>            Follow person n (people view)
    unfollow <n>          Unfollow person n (people view)
    tab                   Switch followers / following (profile view)
SESSION
    login <username>      Log in (password is prompted)
    signup <user> <email> Create an account
    logout                Log out
    help | quit";
