use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use vercflow_core::professional::Professional;

#[derive(Subcommand)]
pub enum ProfessionalSubcommand {
    /// Register a new professional
    Add {
        slug: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        trade: Option<String>,
    },
    /// List all professionals
    List,
}

pub fn run(root: &Path, subcmd: ProfessionalSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProfessionalSubcommand::Add { slug, name, trade } => add(root, &slug, name, trade, json),
        ProfessionalSubcommand::List => list(root, json),
    }
}

fn add(
    root: &Path,
    slug: &str,
    name: Option<String>,
    trade: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let name = name.unwrap_or_else(|| slug.replace('-', " "));
    let professional = Professional::create(root, slug, &name, trade)
        .with_context(|| format!("failed to create professional '{slug}'"))?;

    if json {
        print_json(&professional)?;
    } else {
        println!("Created professional: {slug} — {name}");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let professionals = Professional::list(root).context("failed to list professionals")?;

    if json {
        print_json(&professionals)?;
        return Ok(());
    }

    if professionals.is_empty() {
        println!("No professionals yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = professionals
        .iter()
        .map(|p| {
            vec![
                p.slug.clone(),
                p.name.clone(),
                p.trade.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["SLUG", "NAME", "TRADE"], rows);
    Ok(())
}
