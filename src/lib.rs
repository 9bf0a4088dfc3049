//! horimetro library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::session::{Session, verifier_for};
use errors::{AppError, AppResult};
use store::log::audit_or_warn;

/// Open a session for commands behind the access gate.
pub fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let mut session = Session::new();
    if !cli.command.requires_session() {
        return Ok(session);
    }

    let verifier = verifier_for(cfg);
    if let Err(e) = session.login(
        verifier.as_ref(),
        cli.user.as_deref(),
        cli.password.as_deref(),
    ) {
        if let AppError::AccessDenied(reason) = &e {
            audit_or_warn(
                &cfg.log_path(),
                "login",
                cli.user.as_deref().unwrap_or(""),
                &format!("denied: {reason}"),
            );
        }
        return Err(e);
    }

    Ok(session)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, session),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, session),
        Commands::Fleets => cli::commands::fleets::handle(cfg, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override dello store da riga di comando
    if let Some(custom_store) = &cli.store {
        cfg.store = utils::path::resolve(custom_store)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ access gate, then dispatch
    let session = open_session(&cli, &cfg)?;
    dispatch(&cli, &cfg, &session)
}
