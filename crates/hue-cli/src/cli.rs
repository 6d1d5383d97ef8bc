use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hue",
    about = "Hue — a GraphQL API over a collection of colors",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the GraphQL server
    Serve(ServeArgs),
    /// Validate color values and print their canonical form
    Check(CheckArgs),
    /// Print the GraphQL schema (SDL)
    Schema(SchemaArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides config and $PORT)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// JSON seed file
    #[arg(long)]
    pub seed: Option<PathBuf>,
    /// Disable the GraphiQL playground
    #[arg(long)]
    pub no_playground: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub colors: Vec<String>,
}

#[derive(Args)]
pub struct SchemaArgs {}
