//! Terminal front-end for the ASME session store.
//!
//! Drives the same store the application embeds: `login` and `register`
//! persist a session record in the data directory, `whoami` reads it back,
//! `logout` removes it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use asme_session::{SessionConfig, SessionStore};

#[derive(Parser, Debug)]
#[command(name = "asme-session", about = "ASME image-library session tool")]
struct Cli {
    /// Directory holding the session record (overrides ASME_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and persist the session.
    Login { email: String, password: String },
    /// Create an account and persist the session.
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// End the session and remove the persisted record.
    Logout,
    /// Show the currently persisted identity.
    Whoami,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = SessionConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let store = SessionStore::from_config(&config);
    store.load().await;

    match cli.command {
        Command::Login { email, password } => match store.login(&email, &password).await {
            Ok(identity) => {
                println!("logged in as {} <{}>", identity.name, identity.email);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("login failed: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Register {
            name,
            email,
            password,
        } => match store.register(&name, &email, &password).await {
            Ok(identity) => {
                println!("registered {} <{}>", identity.name, identity.email);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("registration failed: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Logout => {
            store.logout().await;
            println!("logged out");
            ExitCode::SUCCESS
        }
        Command::Whoami => match store.current_identity().await {
            Some(identity) => {
                let role = if identity.is_admin { " (admin)" } else { "" };
                println!("{} <{}>{role}", identity.name, identity.email);
                ExitCode::SUCCESS
            }
            None => {
                println!("not logged in");
                ExitCode::FAILURE
            }
        },
    }
}
