use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::initialize::init_store;
use crate::store::log::audit_or_warn;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - a header-only record store, if none exists yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURAZIONE
    //
    // `cfg.store` already carries any --store override from the dispatcher.
    let cfg = Config::init_all(Some(cfg.store.clone()), cli.test)?;
    let store_path = cfg.store_path();

    println!("⚙️  Initializing horimetro…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store       : {}", store_path.display());

    //
    // 2️⃣ RECORD STORE
    //
    if init_store(&store_path)? {
        success(format!("Record store created at {}", store_path.display()));
    } else {
        info(format!(
            "Record store already present at {}",
            store_path.display()
        ));
    }

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    audit_or_warn(
        &cfg.log_path(),
        "init",
        &store_path.to_string_lossy(),
        "Record store initialized",
    );

    println!("🎉 horimetro initialization completed!");
    Ok(())
}
