//! The send procedure: validate, parse, connect, insert, close, report.
//!
//! The procedure is generic over [`Connector`] so it runs the same against a
//! live MongoDB deployment ([`crate::mongo::MongoConnector`]) and against an
//! in-memory sink in tests.

#![allow(async_fn_in_trait)]

use bson::{Bson, Document};
use tracing::info;

use crate::config::{Config, Target};
use crate::error::SendError;
use crate::payload::parse_payload;

/// An open connection to one collection.
pub trait DocumentSink {
    /// Inserts one document and returns its `_id`.
    async fn insert(&mut self, document: Document) -> Result<Bson, SendError>;

    /// Closes the connection.
    async fn close(self);
}

/// Opens a [`DocumentSink`] for a target.
pub trait Connector {
    type Sink: DocumentSink;

    async fn connect(&self, target: &Target) -> Result<Self::Sink, SendError>;
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum SendReport {
    Inserted { id: Bson },
    /// `--dry-run`: the document that would have been inserted.
    DryRun { document: Document },
}

/// Runs one send.
///
/// The payload is parsed before any connection is opened, so a bad payload
/// never reaches the database. The sink is closed after the insert whether
/// it succeeded or not.
///
/// # Errors
///
/// Returns the first [`SendError`] hit along the way.
pub async fn send_metrics<C: Connector>(
    config: &Config,
    connector: &C,
) -> Result<SendReport, SendError> {
    let document = parse_payload(config.metrics_data.as_deref(), config.mode)?;

    if config.dry_run {
        return Ok(SendReport::DryRun { document });
    }

    info!("Connecting to MongoDB...");
    let mut sink = connector.connect(&config.target).await?;
    info!("Connected to MongoDB.");

    info!(
        database = %config.target.database,
        collection = %config.target.collection,
        "Inserting metrics data..."
    );
    let inserted = sink.insert(document).await;

    sink.close().await;
    info!("MongoDB connection closed.");

    let id = inserted?;
    info!("Successfully inserted document with _id: {}", id);
    Ok(SendReport::Inserted { id })
}
