use anyhow::Result;
use clap::{Parser, Subcommand};
use viralcarrot::cli::GenerateArgs;

/// viralcarrot - Recipe discovery
#[derive(Parser)]
#[command(name = "viralcarrot")]
#[command(about = "Recipe discovery from what you have in the kitchen", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate recipes once and print them as JSON
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = viralcarrot::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    viralcarrot::observability::init_observability(
        "viralcarrot",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => viralcarrot::cli::serve(config, host, port).await,
        Commands::Generate(args) => viralcarrot::cli::generate(config, args).await,
    }
}
