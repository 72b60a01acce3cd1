//! Mock Kaiten API server.
//!
//! Provides an axum-based HTTP server that simulates the Kaiten API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// Path prefix every Kaiten endpoint lives under.
const API_PREFIX: &str = "/api/v1";

/// A mock Kaiten API server for testing.
///
/// The server runs in the background and can be used to test the Kaiten client
/// against a realistic API implementation.
pub struct MockServer {
    /// The base API URL, including the `/api/v1` prefix.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}{}", addr, API_PREFIX),
            handle,
            state: shared_state,
        }
    }

    /// Get the base API URL of the mock server.
    ///
    /// Pass this to `KaitenClient::with_base_url` when testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        scenario
            .spaces
            .into_iter()
            .fold(MockState::new(), MockState::with_space)
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        let api = Router::new()
            .route(
                "/spaces",
                get(handlers::list_spaces).post(handlers::create_space),
            )
            .route(
                "/spaces/:id",
                get(handlers::get_space)
                    .patch(handlers::update_space)
                    .delete(handlers::remove_space),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state);

        Router::new().nest(API_PREFIX, api)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
