//! Splunk search session client.
//!
//! This crate logs in to a Splunk management endpoint, submits a regular
//! expression search as a blocking search job, and returns the job's results
//! as field-name-to-value records.
//!
//! ```rust,ignore
//! use splunk_search_client::SessionClient;
//!
//! let client = SessionClient::new("https://localhost:8089");
//! client.login("admin", "changeme").await?;
//! for record in client.search("status=(?<status>5\\d\\d)", 20).await? {
//!     println!("{:?}", record.get("status"));
//! }
//! ```

mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
mod serde_helpers;
pub mod spl;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::SessionClient;
pub use client::builder::SessionClientBuilder;
pub use config::ConnectionConfig;
pub use error::{ClientError, Result};
pub use models::{ResultRecord, SearchResults};
