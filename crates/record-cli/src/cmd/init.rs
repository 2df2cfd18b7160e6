use anyhow::{anyhow, Context};
use clap::ValueEnum;
use record_core::config::{Config, StoreBackend};
use record_core::{paths, store, RecordError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Memory,
    Redb,
    Sheets,
}

pub fn run(
    root: &Path,
    kind: StoreKind,
    spreadsheet_id: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    println!("Initializing RecordRecord in: {}", root.display());

    // 1. Write config.yaml if missing
    let config = if paths::config_path(root).exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load config")?
    } else {
        let mut cfg = Config {
            store: backend_for(kind, spreadsheet_id)?,
            ..Config::default()
        };
        if let Some(port) = port {
            cfg.server.port = port;
        }
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        cfg
    };

    // 2. Seed header cells in a persistent store
    if config.store == StoreBackend::Memory {
        return Ok(());
    }
    let rows = match store::open(&config.store, root) {
        Ok(rows) => rows,
        Err(RecordError::MissingToken(var)) => {
            println!("  skipped: header row ({var} is not set)");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to open row store"),
    };
    let seeded = store::seed_headers(rows.as_ref()).context("failed to write header row")?;
    if seeded.is_empty() {
        println!("  exists:  header row");
    }
    for exercise in seeded {
        println!(
            "  header:  {} (column {})",
            exercise.header(),
            exercise.column()
        );
    }

    Ok(())
}

fn backend_for(kind: StoreKind, spreadsheet_id: Option<String>) -> anyhow::Result<StoreBackend> {
    Ok(match kind {
        StoreKind::Memory => StoreBackend::Memory,
        StoreKind::Redb => StoreBackend::default(),
        StoreKind::Sheets => StoreBackend::sheets(
            spreadsheet_id.ok_or_else(|| anyhow!("--spreadsheet-id is required for the sheets store"))?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheets_needs_spreadsheet_id() {
        assert!(backend_for(StoreKind::Sheets, None).is_err());
        let backend = backend_for(StoreKind::Sheets, Some("abc".into())).unwrap();
        assert_eq!(backend.kind(), "sheets");
    }

    #[test]
    fn redb_is_default_backend() {
        assert_eq!(
            backend_for(StoreKind::Redb, None).unwrap(),
            StoreBackend::default()
        );
    }
}
