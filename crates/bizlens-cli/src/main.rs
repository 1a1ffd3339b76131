mod dataset;
mod demo;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bizlens-cli")]
#[command(about = "bizlens demo data and wizard tooling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a demo dataset and write it as a store snapshot
    Generate {
        /// Fixed seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 25)]
        customers: usize,

        #[arg(long, default_value_t = 60)]
        interactions: usize,

        #[arg(long, default_value_t = 15)]
        complaints: usize,

        #[arg(long, default_value_t = 40)]
        reviews: usize,

        /// Snapshot directory
        #[arg(long, env = "BIZLENS_DATA_DIR", default_value = "./data")]
        out: PathBuf,
    },
    /// Print dashboard stats for a saved snapshot
    Inspect {
        #[arg(long, env = "BIZLENS_DATA_DIR", default_value = "./data")]
        dir: PathBuf,

        /// Also count reviews rated at least this many stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        min_rating: Option<u8>,
    },
    /// Run the demo wizard in the terminal
    Demo {
        #[arg(long)]
        business_name: String,

        #[arg(long)]
        zip: String,

        #[arg(long)]
        industry: String,

        #[arg(long)]
        seed: Option<u64>,

        /// Query the configured data sources instead of generating results
        #[arg(long)]
        live: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate {
            seed,
            customers,
            interactions,
            complaints,
            reviews,
            out,
        }) => {
            let counts = bizlens_mock::CustomerCounts {
                customers,
                interactions,
                complaints,
                reviews,
            };
            dataset::run_generate(seed, counts, &out)?;
        }
        Some(Commands::Inspect { dir, min_rating }) => dataset::run_inspect(&dir, min_rating)?,
        Some(Commands::Demo {
            business_name,
            zip,
            industry,
            seed,
            live,
        }) => {
            let input = demo::DemoInput {
                business_name,
                zip_code: zip,
                industry,
            };
            demo::run_demo(&input, seed, live).await?;
        }
        None => println!("bizlens-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
