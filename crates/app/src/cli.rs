//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use dip_domain::{QueryParam, ResourceType};

#[derive(Parser, Debug)]
#[command(name = "dip", version, about = "Query the Bundestag DIP API")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a resource and print the response
    Fetch(FetchArgs),
    /// List resources and their documented filters
    Resources,
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Resource to query, e.g. vorgang, drucksache-text, person
    #[arg(value_parser = parse_resource)]
    pub resource: ResourceType,

    /// Document identifier appended to the path
    #[arg(long, default_value = "")]
    pub id: String,

    /// Raw query string, e.g. 'f.wahlperiode=20&f.titel=Klima'
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Extra query parameter; may be repeated for multi-value filters
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<QueryParam>,

    /// API key; the configured default key is used when empty
    #[arg(long, env = "DIP_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Override the API root from the settings file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Also print the status code and URL to stderr
    #[arg(long)]
    pub status: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the settings in effect
    Show,
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_resource(value: &str) -> Result<ResourceType, String> {
    value.parse().map_err(|e: dip_domain::DomainError| e.to_string())
}

fn parse_filter(value: &str) -> Result<QueryParam, String> {
    QueryParam::parse_assignment(value).map_err(|e| e.to_string())
}
