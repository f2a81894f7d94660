use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use vercflow_core::{board, config::Config, record::Record};

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let records = Record::list(root).context("failed to list records")?;
    let board = board::group(records, &config.board.columns);

    if json {
        print_json(&board)?;
        return Ok(());
    }

    println!("{}", board::summarize(&board));
    for column in &board.columns {
        println!("\n[{}] ({})", column.status, column.records.len());
        for record in &column.records {
            let tag = record
                .tag
                .as_deref()
                .map(|t| format!(" #{t}"))
                .unwrap_or_default();
            println!("  {}  {} — {}{}", record.id, record.priority, record.author, tag);
        }
    }
    Ok(())
}
