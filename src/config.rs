//! Validated settings for one send.
//!
//! Settings come from [`Cli`], which clap fills from flags or the matching
//! environment variables:
//! - `MONGODB_URI`: connection URI (required)
//! - `MONGODB_DB_NAME`: database name (required)
//! - `MONGODB_COLLECTION_NAME`: collection name (required)
//! - `METRICS_DATA`: JSON payload
//! - `METRICS_EXTENDED_JSON`: read the payload as Extended JSON

use crate::cli::Cli;
use crate::error::SendError;
use crate::payload::PayloadMode;

/// Where the document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    /// Raw payload text. `None` when `METRICS_DATA` was not set.
    pub metrics_data: Option<String>,
    pub mode: PayloadMode,
    pub dry_run: bool,
}

impl Config {
    /// Builds the configuration, reporting every missing required setting at
    /// once. Empty strings count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::MissingConfig`] if the URI, database or collection
    /// is missing.
    pub fn from_cli(cli: Cli) -> Result<Self, SendError> {
        let uri = non_empty(cli.mongo_uri);
        let database = non_empty(cli.db);
        let collection = non_empty(cli.collection);

        match (uri, database, collection) {
            (Some(uri), Some(database), Some(collection)) => Ok(Self {
                target: Target {
                    uri,
                    database,
                    collection,
                },
                metrics_data: cli.metrics_data,
                mode: if cli.extended_json {
                    PayloadMode::ExtendedJson
                } else {
                    PayloadMode::Plain
                },
                dry_run: cli.dry_run,
            }),
            (uri, database, collection) => {
                let missing = [
                    ("MONGODB_URI", uri.is_none()),
                    ("MONGODB_DB_NAME", database.is_none()),
                    ("MONGODB_COLLECTION_NAME", collection.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(SendError::MissingConfig(missing))
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_cli() -> Cli {
        Cli {
            mongo_uri: Some("mongodb://localhost:27017".into()),
            db: Some("metrics".into()),
            collection: Some("runs".into()),
            metrics_data: Some(r#"{"cpu": 0.5}"#.into()),
            ..Cli::default()
        }
    }

    #[test]
    fn builds_target_from_cli() {
        let config = Config::from_cli(full_cli()).unwrap();
        assert_eq!(
            config.target,
            Target {
                uri: "mongodb://localhost:27017".into(),
                database: "metrics".into(),
                collection: "runs".into(),
            }
        );
        assert_eq!(config.mode, PayloadMode::Plain);
        assert!(!config.dry_run);
    }

    #[test]
    fn reports_all_missing_in_order() {
        let cli = Cli {
            mongo_uri: None,
            db: Some("metrics".into()),
            collection: Some(String::new()),
            ..full_cli()
        };
        match Config::from_cli(cli) {
            Err(SendError::MissingConfig(names)) => {
                assert_eq!(names, vec!["MONGODB_URI", "MONGODB_COLLECTION_NAME"]);
            }
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn missing_payload_is_not_a_config_error() {
        let cli = Cli {
            metrics_data: None,
            ..full_cli()
        };
        let config = Config::from_cli(cli).unwrap();
        assert!(config.metrics_data.is_none());
    }

    #[test]
    fn extended_json_flag_selects_mode() {
        let cli = Cli {
            extended_json: true,
            ..full_cli()
        };
        assert_eq!(
            Config::from_cli(cli).unwrap().mode,
            PayloadMode::ExtendedJson
        );
    }
}
