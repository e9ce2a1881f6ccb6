//! StyleMorph session demo binary

use clap::{Parser, Subcommand};
use morph_session::simulator::{run_simulation, SimulatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "morph-session", version, about = "StyleMorph session core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted session against a deterministic stub backend
    Simulate {
        /// Descriptions produced per reference analysis
        #[arg(long, default_value_t = 3)]
        drafts: usize,
        /// Angles selected for the batch (1..=4)
        #[arg(long, default_value_t = 2)]
        angles: usize,
        /// Fail one angle to demonstrate all-or-nothing rollback
        #[arg(long)]
        inject_failure: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            drafts,
            angles,
            inject_failure,
            json,
        } => {
            let report = run_simulation(SimulatorConfig {
                drafts_per_analysis: drafts,
                angles,
                inject_failure,
            })
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("models:   {}", report.models);
                println!("clothing: {}", report.clothing);
                println!("drafts:   {}", report.drafts);
                println!("history:  {}", report.history);
                match (&report.preview, &report.batch_error) {
                    (Some(preview), _) => println!("preview:  {preview}"),
                    (None, Some(error)) => println!("batch failed: {error}"),
                    (None, None) => println!("preview:  (none)"),
                }
            }
        }
    }
    Ok(())
}
