mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    activity::ActivitySubcommand, professional::ProfessionalSubcommand,
    project::ProjectSubcommand, record::RecordSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vercflow",
    about = "Field-record triage for construction sites — capture, board moves, and conversion to activities",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .vercflow/ or .git/)
    #[arg(long, global = true, env = "VERCFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize vercflow in the current directory
    Init {
        /// Site name (default: directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the triage board grouped by column
    Board,

    /// Manage field records
    Record {
        #[command(subcommand)]
        subcommand: RecordSubcommand,
    },

    /// Convert a record into a formal activity
    Convert {
        /// Record identifier
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Target project slug
        #[arg(long)]
        project: String,
        /// Optional professional slug
        #[arg(long)]
        professional: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        planned_value: f64,
    },

    /// List converted activities
    Activity {
        #[command(subcommand)]
        subcommand: ActivitySubcommand,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        subcommand: ProjectSubcommand,
    },

    /// Manage professionals
    Professional {
        #[command(subcommand)]
        subcommand: ProfessionalSubcommand,
    },

    /// Launch the REST API server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3141")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(&root, name.as_deref(), cli.json),
        Commands::Board => cmd::board::run(&root, cli.json),
        Commands::Record { subcommand } => cmd::record::run(&root, subcommand, cli.json),
        Commands::Convert {
            id,
            title,
            description,
            project,
            professional,
            planned_value,
        } => cmd::convert::run(
            &root,
            &id,
            title,
            description,
            project,
            professional,
            planned_value,
            cli.json,
        ),
        Commands::Activity { subcommand } => cmd::activity::run(&root, subcommand, cli.json),
        Commands::Project { subcommand } => cmd::project::run(&root, subcommand, cli.json),
        Commands::Professional { subcommand } => {
            cmd::professional::run(&root, subcommand, cli.json)
        }
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
