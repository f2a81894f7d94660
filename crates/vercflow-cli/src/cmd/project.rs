use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use vercflow_core::project::Project;

#[derive(Subcommand)]
pub enum ProjectSubcommand {
    /// Register a new project
    Add {
        slug: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all projects
    List,
}

pub fn run(root: &Path, subcmd: ProjectSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProjectSubcommand::Add {
            slug,
            name,
            description,
        } => add(root, &slug, name, description, json),
        ProjectSubcommand::List => list(root, json),
    }
}

fn add(
    root: &Path,
    slug: &str,
    name: Option<String>,
    description: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let name = name.unwrap_or_else(|| slug.replace('-', " "));
    let project = Project::create(root, slug, &name, description)
        .with_context(|| format!("failed to create project '{slug}'"))?;

    if json {
        print_json(&project)?;
    } else {
        println!("Created project: {slug} — {name}");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let projects = Project::list(root).context("failed to list projects")?;

    if json {
        print_json(&projects)?;
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| vec![p.slug.clone(), p.name.clone()])
        .collect();
    print_table(&["SLUG", "NAME"], rows);
    Ok(())
}
