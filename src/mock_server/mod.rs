//! Mock Kaiten API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Kaiten API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server maintains state across requests, enabling
//! realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use kaitenapi::mock_server::MockServer;
//! use kaitenapi::{Get, KaitenClient, Space};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = KaitenClient::with_base_url("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let space = Space::get(&client, 1).await.unwrap();
//!     assert_eq!(space.data.title, "Engineering");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
