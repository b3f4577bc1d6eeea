//! `stat-criteria` command line: serve the HTTP API, run one criterion, or
//! generate sample data.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use stat_criteria::api::{AppState, create_router};
use stat_criteria::{Config, Criterion, Sample, generate};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stat-criteria")]
#[command(author, version, about = "Classical statistical criteria at α = 0.05")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: nearest stat-criteria.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run one criterion on samples given inline or as CSV columns
    Run {
        /// Criterion identifier, e.g. `student` or `mann-whitney`
        criterion: String,
        /// A sample as delimited text; repeat for each sample or group
        #[arg(short, long = "sample")]
        samples: Vec<String>,
        /// CSV file whose columns are the samples
        #[arg(short, long, conflicts_with = "samples")]
        file: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate synthetic samples for a criterion
    Generate {
        /// Criterion identifier
        criterion: String,
        /// Sample or group size
        #[arg(short)]
        n: Option<usize>,
        /// Size of the first sample
        #[arg(long)]
        n1: Option<usize>,
        /// Size of the second sample
        #[arg(long)]
        n2: Option<usize>,
        /// Number of groups
        #[arg(short)]
        k: Option<usize>,
        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
        /// Print the data as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "stat_criteria=debug"
    } else {
        "stat_criteria=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::discover().unwrap_or_default(),
    };

    match cli.command {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Run {
            criterion,
            samples,
            file,
            json,
        } => run(&criterion, &samples, file, json),
        Commands::Generate {
            criterion,
            n,
            n1,
            n2,
            k,
            seed,
            json,
        } => {
            let criterion: Criterion = criterion.parse()?;
            let sizes = config.generator.sizes(n, n1, n2, k);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let generated = generate(criterion, sizes, config.generator.decimals, &mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&generated.fields)?);
            } else {
                println!("{generated}");
            }
            Ok(())
        }
    }
}

async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = config.bind_addr();
    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .context("server error")
}

fn run(name: &str, texts: &[String], file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let criterion: Criterion = name.parse()?;

    let samples: Vec<Sample<f64>> = match file {
        Some(path) => Sample::read_columns(&path)?
            .into_iter()
            .map(|(_, sample)| sample)
            .collect(),
        None => texts
            .iter()
            .map(|text| Sample::parse(text))
            .collect::<stat_criteria::Result<_>>()?,
    };
    if samples.is_empty() {
        bail!("no samples given, use --sample or --file");
    }

    let result = criterion.run(&samples)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}
