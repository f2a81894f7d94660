use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use std::str::FromStr;
use vercflow_core::{
    config::Config,
    record::Record,
    types::{BoardStatus, PipelinePhase, Priority, RecordKind},
};

#[derive(Subcommand)]
pub enum RecordSubcommand {
    /// Capture a new field record
    Capture {
        #[arg(long)]
        author: String,
        #[arg(long)]
        content: String,
        /// How the record was captured: sketch or text
        #[arg(long, default_value = "text")]
        kind: String,
        /// Optional project slug
        #[arg(long)]
        project: Option<String>,
        /// normal, high, or critical
        #[arg(long)]
        priority: Option<String>,
    },
    /// List all records
    List,
    /// Show record details
    Show { id: String },
    /// Move a record to another board column
    Move { id: String, status: String },
    /// Set the classification tag
    Classify { id: String, tag: String },
    /// Set the priority
    Prioritize { id: String, priority: String },
    /// Advance the capture pipeline phase
    Advance { id: String, phase: String },
}

pub fn run(root: &Path, subcmd: RecordSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        RecordSubcommand::Capture {
            author,
            content,
            kind,
            project,
            priority,
        } => capture(root, author, content, &kind, project, priority, json),
        RecordSubcommand::List => list(root, json),
        RecordSubcommand::Show { id } => show(root, &id, json),
        RecordSubcommand::Move { id, status } => move_record(root, &id, &status, json),
        RecordSubcommand::Classify { id, tag } => classify(root, &id, tag, json),
        RecordSubcommand::Prioritize { id, priority } => prioritize(root, &id, &priority, json),
        RecordSubcommand::Advance { id, phase } => advance(root, &id, &phase, json),
    }
}

fn capture(
    root: &Path,
    author: String,
    content: String,
    kind_str: &str,
    project: Option<String>,
    priority_str: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let kind = RecordKind::from_str(kind_str)
        .with_context(|| format!("unknown kind: {kind_str}"))?;
    let priority = priority_str
        .as_deref()
        .map(Priority::from_str)
        .transpose()
        .with_context(|| "unknown priority")?;

    let record = Record::create(root, author, content, kind, project, priority)
        .context("failed to capture record")?;

    if json {
        print_json(&record)?;
    } else {
        println!("Captured record: {}", record.id);
        println!("Status: {}  Phase: {}", record.status, record.phase);
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let records = Record::list(root).context("failed to list records")?;

    if json {
        print_json(&records)?;
        return Ok(());
    }

    if records.is_empty() {
        println!("No records yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.status.to_string(),
                r.priority.to_string(),
                r.tag.clone().unwrap_or_default(),
                r.author.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "PRIORITY", "TAG", "AUTHOR"], rows);
    Ok(())
}

fn show(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let record = Record::load(root, id).with_context(|| format!("record '{id}' not found"))?;

    if json {
        print_json(&record)?;
        return Ok(());
    }

    println!("Record: {}", record.id);
    println!("Author:   {}", record.author);
    println!("Kind:     {}", record.kind);
    println!("Status:   {}", record.status);
    println!("Phase:    {}", record.phase);
    println!("Priority: {}", record.priority);
    if let Some(ref tag) = record.tag {
        println!("Tag:      {tag}");
    }
    if let Some(ref project) = record.project {
        println!("Project:  {project}");
    }
    println!("Created:  {}", record.created_at.format("%Y-%m-%d %H:%M"));
    println!("\nContent:\n{}", record.content);

    if record.status_history.len() > 1 {
        println!("\nHistory:");
        for change in &record.status_history {
            println!(
                "  {}  {}",
                change.entered.format("%Y-%m-%d %H:%M"),
                change.status
            );
        }
    }

    Ok(())
}

fn move_record(root: &Path, id: &str, status_str: &str, json: bool) -> anyhow::Result<()> {
    let target = BoardStatus::from_str(status_str)
        .with_context(|| format!("unknown status: {status_str}"))?;

    let config = Config::load(root).context("failed to load config")?;
    let mut record = Record::load(root, id).with_context(|| format!("record '{id}' not found"))?;

    record
        .move_to(target, &config)
        .with_context(|| format!("cannot move '{id}' to {status_str}"))?;
    record.save(root).context("failed to save record")?;

    if json {
        print_json(&record)?;
    } else {
        println!("Moved {} to {}", record.id, record.status);
    }
    Ok(())
}

fn classify(root: &Path, id: &str, tag: String, json: bool) -> anyhow::Result<()> {
    let mut record = Record::load(root, id).with_context(|| format!("record '{id}' not found"))?;
    record.classify(tag);
    record.save(root).context("failed to save record")?;

    if json {
        print_json(&record)?;
    } else {
        println!(
            "Classified {} as {}",
            record.id,
            record.tag.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn prioritize(root: &Path, id: &str, priority_str: &str, json: bool) -> anyhow::Result<()> {
    let priority = Priority::from_str(priority_str)
        .with_context(|| format!("unknown priority: {priority_str}"))?;

    let mut record = Record::load(root, id).with_context(|| format!("record '{id}' not found"))?;
    record.set_priority(priority);
    record.save(root).context("failed to save record")?;

    if json {
        print_json(&record)?;
    } else {
        println!("Set {} priority to {}", record.id, record.priority);
    }
    Ok(())
}

fn advance(root: &Path, id: &str, phase_str: &str, json: bool) -> anyhow::Result<()> {
    let target = PipelinePhase::from_str(phase_str)
        .with_context(|| format!("unknown phase: {phase_str}"))?;

    let mut record = Record::load(root, id).with_context(|| format!("record '{id}' not found"))?;
    record
        .advance_phase(target)
        .with_context(|| format!("cannot advance '{id}' to {phase_str}"))?;
    record.save(root).context("failed to save record")?;

    if json {
        print_json(&record)?;
    } else {
        println!("Advanced {} to {}", record.id, record.phase);
    }
    Ok(())
}
