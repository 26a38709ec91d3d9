use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod discovery;
mod error;
mod gen;
mod naming;
mod site;

use config::Config;

#[derive(Parser)]
#[command(author, version, about = "Static course hub generator")]
struct Cli {
    #[clap(long, global = true, help = "Path to the hub config file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Generate the dashboard index page")]
    Dashboard,
    #[command(about = "Generate a viewer page for every discovered course")]
    Viewers,
    #[command(about = "Generate the viewer page for one course directory")]
    Viewer {
        #[clap(help = "Course directory, relative to the hub root")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursehub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let root = Path::new(".");

    match cli.command {
        Command::Dashboard => {
            let summary = gen::generate_dashboard(&config, root)
                .context("dashboard generation failed")?;
            println!(
                "Generated {} with {} courses and {} total lessons",
                gen::DASHBOARD_FILE,
                summary.courses,
                summary.lessons
            );
        }
        Command::Viewers => {
            let summary = gen::generate_all_viewers(&config, root)
                .context("viewer generation failed")?;
            println!(
                "Generated {} viewers covering {} lessons ({} failed)",
                summary.courses, summary.lessons, summary.failures
            );
        }
        Command::Viewer { dir } => {
            let summary = gen::generate_viewer(root, &dir)
                .with_context(|| format!("viewer generation failed for {}", dir.display()))?;
            println!(
                "Generated {} for {} with {} lessons",
                discovery::VIEWER_FILE,
                dir.display(),
                summary.lessons
            );
        }
    }
    Ok(())
}
