//! Murmur - a terminal client for the murmur social network
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use murmur::api::ApiClient;
use murmur::auth::{AuthForm, Session, SessionStore};
use murmur::feed::FeedController;
use murmur::{Config, render};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Shell => murmur::app::run().await,
        Command::Login { username } => login_cli(&username).await,
        Command::Signup { username, email } => signup_cli(&username, &email).await,
        Command::Logout => logout_cli(),
        Command::Whoami => whoami_cli(),
        Command::Feed => feed_cli().await,
        Command::Post { content } => post_cli(&content).await,
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Shell,
    Login { username: String },
    Signup { username: String, email: String },
    Logout,
    Whoami,
    Feed,
    Post { content: String },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Shell);
    }

    let arg = |i: usize, what: &str| {
        args.get(i)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Missing {what}\nRun 'murmur --help' for usage"))
    };

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "shell" => Ok(Command::Shell),
        "login" => Ok(Command::Login {
            username: arg(2, "username")?,
        }),
        "signup" => Ok(Command::Signup {
            username: arg(2, "username")?,
            email: arg(3, "email")?,
        }),
        "logout" => Ok(Command::Logout),
        "whoami" => Ok(Command::Whoami),
        "feed" => Ok(Command::Feed),
        "post" => Ok(Command::Post {
            content: args[2..].join(" "),
        }),
        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'murmur --help' for usage"
        )),
    }
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
Murmur - a terminal client for the murmur social network

USAGE:
    murmur                             Start the interactive shell
    murmur [COMMAND]

COMMANDS:
    login <username>                   Log in (password read from stdin)
    signup <username> <email>          Create an account
    logout                             Forget the saved session
    whoami                             Show the saved identity
    feed                               Print the feed
    post <content>                     Publish a post

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

SHELL:
{}

ENVIRONMENT:
    MURMUR_API_URL                     Backend base URL (default {})
    RUST_LOG                           Log filter (default warn)

CONFIG:
    {}
"#,
        murmur::LOGO,
        murmur::app::HELP,
        murmur::api::DEFAULT_API_URL,
        config_path
    );
}

fn print_version() {
    println!("murmur {}", murmur::VERSION);
}

fn client() -> Result<ApiClient> {
    let config = Config::load()?;
    Ok(ApiClient::new(&config.api_url()))
}

fn read_password() -> Result<String> {
    println!("Password:");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

async fn submit(form: &mut AuthForm) -> Result<()> {
    let api = client()?;
    let store = SessionStore::open()?;
    let mut session = Session::restore(&store);

    if form.submit(&api, &store, &mut session).await {
        let name = session.user().map(|u| u.username.as_str()).unwrap_or_default();
        println!("✓ Logged in as @{name}");
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{}",
            form.alert().unwrap_or("Authentication failed")
        ))
    }
}

async fn login_cli(username: &str) -> Result<()> {
    let password = read_password()?;
    submit(&mut AuthForm::login(username, &password)).await
}

async fn signup_cli(username: &str, email: &str) -> Result<()> {
    let password = read_password()?;
    submit(&mut AuthForm::signup(username, email, &password)).await
}

fn logout_cli() -> Result<()> {
    Session::forget(&SessionStore::open()?)?;
    println!("✓ Logged out");
    Ok(())
}

fn whoami_cli() -> Result<()> {
    let store = SessionStore::open()?;
    let session = Session::restore(&store);

    match session.user() {
        Some(user) => {
            println!("@{} ({})", user.username, user.id);
            if let Some(email) = &user.email {
                println!("{email}");
            }
        }
        None if session.needs_login() => {
            println!("Saved session has no identity. Run: murmur login <username>");
        }
        None => println!("Not logged in. Run: murmur login <username>"),
    }
    Ok(())
}

fn logged_in_session() -> Result<Session> {
    let store = SessionStore::open()?;
    let session = Session::restore(&store);
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run: murmur login <username>");
    }
    Ok(session)
}

async fn feed_cli() -> Result<()> {
    let config = Config::load()?;
    let api = ApiClient::new(&config.api_url());
    let session = logged_in_session()?;

    let mut feed = FeedController::new();
    feed.refresh(&api, &session).await?;
    print!("{}", render::feed(&feed, config.wrap_width));
    Ok(())
}

async fn post_cli(content: &str) -> Result<()> {
    let api = client()?;
    let session = logged_in_session()?;

    let mut feed = FeedController::new();
    feed.compose = content.to_string();
    if !feed.create_post(&api, &session).await? {
        anyhow::bail!("Missing post content");
    }
    println!("✓ Posted");
    Ok(())
}
