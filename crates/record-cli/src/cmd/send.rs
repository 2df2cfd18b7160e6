use crate::output::print_json;
use anyhow::Context;
use record_core::config::Config;
use record_core::{store, CommandRouter};
use std::path::Path;

/// Run `message` through the command router against the configured store.
pub fn run(root: &Path, message: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let rows = store::open(&config.store, root).context("failed to open row store")?;
    let reply = CommandRouter::new(rows).handle(message);

    if json {
        print_json(&serde_json::json!({
            "message": message,
            "reply": reply,
        }))?;
    } else {
        println!("{reply}");
    }
    Ok(())
}
