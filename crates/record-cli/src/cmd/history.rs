use crate::output::{print_json, print_table};
use anyhow::Context;
use record_core::config::Config;
use record_core::ledger::PrLedger;
use record_core::{store, Exercise};
use std::path::Path;

pub fn run(root: &Path, exercise: &str, json: bool) -> anyhow::Result<()> {
    let exercise: Exercise = exercise.parse()?;
    let config = Config::load(root).context("failed to load config")?;
    let rows = store::open(&config.store, root).context("failed to open row store")?;

    let ledger = PrLedger::new(rows.as_ref());
    let entries = ledger.history(exercise)?;
    let best_row = ledger.get_max(exercise)?.map(|e| e.row);

    if json {
        return print_json(&serde_json::json!({
            "exercise": exercise,
            "best_row": best_row,
            "entries": entries,
        }));
    }

    if entries.is_empty() {
        println!("No {} lifts recorded.", exercise.display_name());
        return Ok(());
    }

    let table: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let mark = if Some(e.row) == best_row { "PR" } else { "" };
            vec![e.row.to_string(), e.text.clone(), mark.to_string()]
        })
        .collect();
    print_table(&["ROW", "KG", "BEST"], &table);
    Ok(())
}
