//! # belgraph-client
//!
//! Synchronous client for a remote BEL knowledge graph whose query surface is
//! a catalog of stored server-side functions reached over HTTP with basic
//! authentication.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use belgraph_client::{Client, ConnectConfig, HttpBackend, query};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectConfig::new("https://graphstore.example.org", "covid", "guest", "guest");
//!     let client = Client::new(HttpBackend::new(config));
//!
//!     let cd33 = query::causal_correlative_by_gene(&client, "CD33")?;
//!     let trem2 = query::causal_correlative_by_gene(&client, "TREM2")?;
//!     let both = cd33.union(&trem2.clone().into())?;
//!     println!("{} edges combined", both.len());
//!     Ok(())
//! }
//! ```
//!
//! The transport sits behind the [`QueryBackend`] trait so tests (and offline
//! development) can inject [`MockBackend`] instead of a live server.

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod statistics;
pub mod transport;

pub use client::Client;
pub use config::ConnectConfig;
pub use error::ClientError;
pub use transport::{ApiArg, HttpBackend, MockBackend, QueryBackend};
