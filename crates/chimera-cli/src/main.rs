//! CHIMERA-HUNTER dashboard CLI
//!
//! The `chimera` command renders the operations dashboard to static HTML.
//!
//! ## Commands
//!
//! - `render`: Render the dashboard (placeholder or from a snapshot file)
//! - `snapshot`: Emit the placeholder snapshot as a JSON template
//! - `validate`: Check a snapshot file against the dashboard's invariants

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use chimera_core::{
    emit_snapshot_validated, read_snapshot_json, render_digest, write_html, write_snapshot_json,
    ChimeraTheme, Dashboard, DashboardSnapshot,
};

#[derive(Parser)]
#[command(name = "chimera")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the CHIMERA-HUNTER operations dashboard", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true, env = "CHIMERA_LOG_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard as HTML
    Render {
        /// Snapshot JSON to render instead of the idle placeholder
        #[arg(long, env = "CHIMERA_SNAPSHOT")]
        snapshot: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the page body, without the document shell
        #[arg(long)]
        fragment: bool,

        /// Print the sha256 digest of the output to stderr
        #[arg(long)]
        digest: bool,
    },

    /// Write the placeholder snapshot as JSON
    Snapshot {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a snapshot file
    Validate {
        /// Snapshot JSON to check
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    chimera_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Render {
            snapshot,
            output,
            fragment,
            digest,
        } => {
            let markup = cmd_render(snapshot.as_deref(), fragment)?;
            if digest {
                eprintln!("{}", render_digest(&markup));
            }
            emit(output.as_deref(), &markup)
        }
        Commands::Snapshot { output } => cmd_snapshot(output.as_deref()),
        Commands::Validate { path } => {
            cmd_validate(&path)?;
            println!("OK");
            Ok(())
        }
    }
}

/// Load and validate a snapshot, or fall back to the placeholder.
fn load_snapshot(path: Option<&Path>) -> Result<DashboardSnapshot> {
    match path {
        Some(path) => {
            let snapshot = read_snapshot_json(path)?;
            snapshot
                .validate()
                .with_context(|| format!("invalid snapshot {:?}", path))?;
            emit_snapshot_validated(
                &path.display().to_string(),
                snapshot.targets.len(),
                snapshot.logs.len(),
            );
            Ok(snapshot)
        }
        None => Ok(DashboardSnapshot::placeholder()),
    }
}

fn cmd_render(snapshot: Option<&Path>, fragment: bool) -> Result<String> {
    let snapshot = load_snapshot(snapshot)?;
    let theme = ChimeraTheme;
    let dashboard = Dashboard::new(snapshot, &theme);
    let markup = if fragment {
        dashboard.render_fragment()
    } else {
        dashboard.render_document()
    };
    info!(bytes = markup.len(), fragment = fragment, "dashboard rendered");
    Ok(markup)
}

fn cmd_snapshot(output: Option<&Path>) -> Result<()> {
    let snapshot = DashboardSnapshot::placeholder();
    match output {
        Some(path) => {
            write_snapshot_json(path, &snapshot)?;
            info!(path = ?path, "placeholder snapshot written");
            Ok(())
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
    }
}

fn cmd_validate(path: &Path) -> Result<DashboardSnapshot> {
    load_snapshot(Some(path))
}

fn emit(output: Option<&Path>, markup: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_html(path, markup)?;
            info!(path = ?path, "dashboard written");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(markup.as_bytes())
                .context("write dashboard to stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}
