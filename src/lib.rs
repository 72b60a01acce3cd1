//! Kaiten API client library.
//!
//! A Rust library for interacting with the Kaiten REST API using a
//! trait-based architecture where each operation (Get, List, Create,
//! Update, Remove) is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use kaitenapi::{CreateSpaceParams, Create, Get, KaitenClient, List, Space};
//!
//! #[tokio::main]
//! async fn main() -> kaitenapi::Result<()> {
//!     // Create client from environment variables
//!     let client = KaitenClient::from_env()?;
//!
//!     // List all spaces
//!     let spaces = Space::list(&client).await?.into_data();
//!     println!("Found {} spaces", spaces.len());
//!
//!     // Create a space, then fetch it back
//!     let params = CreateSpaceParams {
//!         title: Some("Engineering".to_string()),
//!         ..Default::default()
//!     };
//!     let created = Space::create(&client, params).await?;
//!     let space = Space::get(&client, created.data.id).await?;
//!     println!("Space: {} ({})", space.data.title, space.response.status());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! [`KaitenClient`] owns the request pipeline: it resolves paths against the
//! tenant's base URL, encodes payloads (JSON bodies for `PATCH`/`POST`/`PUT`,
//! query strings otherwise), adds the bearer token, and turns every non-200
//! answer into [`KaitenError::Api`].
//!
//! Entity types implement the operation traits their endpoints support:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch every entity of a type
//! - [`Create`] - Create an entity
//! - [`Update`] - Partially update an entity
//! - [`Remove`] - Delete an entity
//!
//! Successful calls return an [`Envelope`] pairing the decoded data with the
//! [`Response`] metadata.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `KAITEN_TOKEN` (required) - Your Kaiten API token
//! - `KAITEN_DOMAIN` (required unless `KAITEN_API_URL` is set) - Tenant subdomain
//! - `KAITEN_API_URL` (optional) - Base URL override

pub mod cli;
mod client;
mod error;
pub mod mcp;
mod models;
mod output;
mod request;
mod response;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::KaitenClient;
pub use error::{ErrorResponse, KaitenError, Result};
pub use output::PrettyPrint;
pub use request::Request;
pub use response::{Envelope, Response};

// Re-export traits
pub use traits::{Create, Get, List, Remove, Update};

// Re-export models
pub use models::{CreateSpaceParams, Space, SpaceSettings, Timeline, UpdateSpaceParams};
