// src/cli.rs
use clap::Parser;

/// Insert a JSON metrics payload into a MongoDB collection.
///
/// Every option can be supplied through its environment variable.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongo_uri: Option<String>,

    /// Database name
    #[arg(long, env = "MONGODB_DB_NAME")]
    pub db: Option<String>,

    /// Collection name
    #[arg(long, env = "MONGODB_COLLECTION_NAME")]
    pub collection: Option<String>,

    /// JSON metrics payload, inserted as one document
    #[arg(long, env = "METRICS_DATA", hide_env_values = true)]
    pub metrics_data: Option<String>,

    /// Read the payload as MongoDB Extended JSON ($oid, $date, ...)
    #[arg(long, env = "METRICS_EXTENDED_JSON")]
    pub extended_json: bool,

    /// Validate and print the document without connecting
    #[arg(long)]
    pub dry_run: bool,
}
