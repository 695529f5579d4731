//! Klout API Client Library
//!
//! Async client for the Klout v1 REST API:
//! - Batch score lookups (`klout`)
//! - Batch and single user profiles (`users/show`)
//! - Lazily fetched topics and sphere-of-influence edges per user

pub mod client;
pub mod config;
pub mod models;
pub mod transport;
pub mod user;

pub use client::{Client, ScreenNames};
pub use config::ClientConfig;
pub use models::ScoreRecord;
pub use transport::Transport;
pub use user::User;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed with HTTP status {status}")]
    Request { status: u16 },

    #[error("No Klout account found for '{users}'")]
    Account { users: String },

    #[error("Malformed JSON in response body: {source}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No attribute named '{0}'")]
    AttributeNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status carried by a `Request` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status } => Some(*status),
            _ => None,
        }
    }

    /// True for a `Request` error with status 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
