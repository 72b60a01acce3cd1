//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Kaiten API server.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::mock_server::Fixtures;
use crate::{CreateSpaceParams, Space, UpdateSpaceParams};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Spaces indexed by ID, listed in ID order.
    pub spaces: BTreeMap<u64, Space>,

    /// Optional authentication token. If set, requests must carry it as a bearer token.
    pub required_token: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a space to the state.
    pub fn with_space(mut self, space: Space) -> Self {
        self.spaces.insert(space.id, space);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Check an `Authorization` header value against the required token.
    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match &self.required_token {
            Some(token) => authorization == Some(format!("Bearer {token}").as_str()),
            None => true,
        }
    }

    /// Get a space by ID.
    pub fn get_space(&self, id: u64) -> Option<&Space> {
        self.spaces.get(&id)
    }

    /// List all spaces in ID order.
    pub fn list_spaces(&self) -> Vec<&Space> {
        self.spaces.values().collect()
    }

    /// Create a space with the next free ID.
    ///
    /// Returns `None` when no title is given.
    pub fn create_space(&mut self, params: CreateSpaceParams) -> Option<&Space> {
        let title = params.title?;
        let id = self.spaces.keys().next_back().map_or(1, |last| last + 1);
        let now = Utc::now();

        let mut space = Fixtures::minimal_space(id, &title);
        space.external_id = params.external_id;
        space.created = Some(now);
        space.updated = Some(now);

        self.spaces.insert(id, space);
        self.spaces.get(&id)
    }

    /// Apply a partial update and return the updated version.
    pub fn update_space(&mut self, id: u64, params: UpdateSpaceParams) -> Option<&Space> {
        let space = self.spaces.get_mut(&id)?;
        if let Some(title) = params.title {
            space.title = title;
        }
        if let Some(external_id) = params.external_id {
            space.external_id = Some(external_id);
        }
        if let Some(ids) = params.allowed_card_type_ids {
            space.allowed_card_type_ids = Some(ids);
        }
        space.updated = Some(Utc::now());
        self.spaces.get(&id)
    }

    /// Remove a space, returning it if it existed.
    pub fn remove_space(&mut self, id: u64) -> Option<Space> {
        self.spaces.remove(&id)
    }
}
