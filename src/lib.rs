//! Insert a single JSON metrics document into a MongoDB collection.
//!
//! The flow is linear: read configuration, parse the payload, connect,
//! insert, close. See [`sender::send_metrics`].

#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod mongo;
pub mod payload;
pub mod sender;

pub use config::Config;
pub use error::SendError;
pub use payload::{parse_payload, PayloadMode};
pub use sender::{send_metrics, Connector, DocumentSink, SendReport};
