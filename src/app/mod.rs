//! Interactive shell
//!
//! Reads one command per line, runs it against the backend and prints the
//! current view. Requests run one at a time, in the order they were typed.

mod commands;
mod state;

pub use commands::{Command, HELP, View, parse};
pub use state::AppState;

use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::api::ApiClient;
use crate::auth::{AuthForm, Session, SessionStore};
use crate::config::Config;

type Input = Lines<BufReader<Stdin>>;

fn print_prompt(label: &str) -> Result<()> {
    print!("{label}");
    std::io::stdout().flush().context("Failed to flush stdout")
}

async fn read_secret(input: &mut Input, label: &str) -> Result<Option<String>> {
    print_prompt(label)?;
    Ok(input
        .next_line()
        .await?
        .map(|line| line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the shell until `quit` or end of input
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let store = SessionStore::open()?;
    let session = Session::restore(&store);
    let api = ApiClient::new(&config.api_url());
    tracing::debug!("Using backend {}", api.base_url());

    let mut state = AppState::new(config, store, session);

    if state.session.needs_login() {
        state.set_status("Your saved session is incomplete. Please log in: login <username>");
    } else if state.session.is_authenticated() {
        state.refresh(&api).await;
    } else {
        state.set_status("Welcome! login <username> or signup <username> <email>");
    }
    println!("{}", state.render());

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_prompt("murmur> ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };

        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Login { username } => {
                let Some(password) = read_secret(&mut input, "Password: ").await? else {
                    break;
                };
                let mut form = AuthForm::login(&username, &password);
                state.submit_auth(&api, &mut form).await;
            }
            Command::Signup { username, email } => {
                let Some(password) = read_secret(&mut input, "Password: ").await? else {
                    break;
                };
                let mut form = AuthForm::signup(&username, &email, &password);
                state.submit_auth(&api, &mut form).await;
            }
            command => state.handle(&api, command).await,
        }

        if state.should_quit {
            break;
        }
        println!("{}", state.render());
    }

    Ok(())
}
