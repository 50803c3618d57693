// src/mongo.rs
use bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::debug;

use crate::config::Target;
use crate::error::SendError;
use crate::sender::{Connector, DocumentSink};

/// Opens real MongoDB connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

/// A connected client bound to one collection.
pub struct MongoSink {
    client: Client,
    collection: Collection<Document>,
}

/// Parses the URI, builds a client and pings the target database so a bad
/// host or credentials fail here rather than on insert.
pub async fn connect(target: &Target) -> Result<MongoSink, SendError> {
    let mut client_options = ClientOptions::parse(&target.uri)
        .await
        .map_err(SendError::Connect)?;
    client_options
        .app_name
        .get_or_insert_with(|| env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(client_options).map_err(SendError::Connect)?;
    let db = client.database(&target.database);

    if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
        client.shutdown().await;
        return Err(SendError::Connect(e));
    }
    debug!(database = %target.database, "ping succeeded");

    Ok(MongoSink {
        collection: db.collection::<Document>(&target.collection),
        client,
    })
}

impl Connector for MongoConnector {
    type Sink = MongoSink;

    async fn connect(&self, target: &Target) -> Result<MongoSink, SendError> {
        connect(target).await
    }
}

impl DocumentSink for MongoSink {
    async fn insert(&mut self, document: Document) -> Result<Bson, SendError> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(SendError::Insert)?;
        Ok(result.inserted_id)
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}
