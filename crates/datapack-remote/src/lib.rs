//! Remote loading of data packages over HTTP.
//!
//! This crate resolves package locators into descriptor URLs (`ident`),
//! fetches and normalizes descriptors (`RemoteLoader`), loads whole sets of
//! URLs concurrently into one name-keyed map (`load_many_urls`), and
//! persists URL lists for batch fetching (`SourceList`).

pub mod batch;
pub mod config;
pub mod http;
pub mod ident;

pub use batch::load_many_urls;
pub use config::SourceList;
pub use http::RemoteLoader;
pub use ident::{resolve, ResolvedSource};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },
    #[error("unable to access {url}: status code {status}")]
    Status { url: String, status: u16 },
    #[error("descriptor at {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("source list error: {0}")]
    Config(String),
}

#[cfg(test)]
mod testserver;
