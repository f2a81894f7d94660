use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use vercflow_core::activity::Activity;

#[derive(Subcommand)]
pub enum ActivitySubcommand {
    /// List all activities
    List,
    /// Show activity details
    Show { id: String },
}

pub fn run(root: &Path, subcmd: ActivitySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ActivitySubcommand::List => list(root, json),
        ActivitySubcommand::Show { id } => show(root, &id, json),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let activities = Activity::list(root).context("failed to list activities")?;

    if json {
        print_json(&activities)?;
        return Ok(());
    }

    if activities.is_empty() {
        println!("No activities yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = activities
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.project.clone(),
                a.professional.clone().unwrap_or_default(),
                format!("{:.2}", a.planned_value),
                a.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "PROJECT", "PROFESSIONAL", "VALUE", "TITLE"], rows);
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let activity = Activity::load(root, id).with_context(|| format!("activity '{id}' not found"))?;

    if json {
        print_json(&activity)?;
        return Ok(());
    }

    println!("Activity: {} — {}", activity.id, activity.title);
    println!("Project:  {}", activity.project);
    if let Some(ref professional) = activity.professional {
        println!("Professional: {professional}");
    }
    println!("Planned value: {:.2}", activity.planned_value);
    println!("Source record: {}", activity.source_record);
    if !activity.description.is_empty() {
        println!("\n{}", activity.description);
    }
    Ok(())
}
