use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "user-registry")]
#[command(about = "Build an in-memory user registry and query it")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Organization name (overrides the config file)
    #[arg(long)]
    pub organization: Option<String>,

    /// JSON or CSV file of users to load (overrides the config file)
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the organization and every user in insertion order
    List,
    /// Print the user returned for an id
    Lookup {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
}
