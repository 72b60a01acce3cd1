//! Space model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::{Envelope, Response};
use crate::traits::{Create, Get, List, Remove, Update};

/// A Kaiten space.
///
/// Spaces are the top-level containers for boards. They can be nested; the
/// hierarchy is reflected in [`path`](Space::path) and
/// [`parent_entity_uid`](Space::parent_entity_uid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Space ID.
    pub id: u64,

    /// Space UID.
    #[serde(default)]
    pub uid: Option<String>,

    /// Space title.
    pub title: String,

    /// Last update timestamp.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// Whether the space is archived.
    #[serde(default)]
    pub archived: bool,

    /// Access mode (e.g., "for_everyone", "by_invite").
    #[serde(default)]
    pub access: Option<String>,

    /// Role granted to everyone when access is "for_everyone".
    #[serde(default)]
    pub for_everyone_access_role_id: Option<String>,

    /// Entity type, always "space" for spaces.
    #[serde(default)]
    pub entity_type: Option<String>,

    /// Inner path of the space in the tree.
    #[serde(default)]
    pub path: Option<String>,

    /// Position among siblings.
    #[serde(default)]
    pub sort_order: Option<f64>,

    /// UID of the parent entity.
    #[serde(default)]
    pub parent_entity_uid: Option<String>,

    /// Company ID.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Card types allowed in this space.
    #[serde(default)]
    pub allowed_card_type_ids: Option<Vec<String>>,

    /// External ID.
    #[serde(default)]
    pub external_id: Option<u64>,

    /// Space settings.
    #[serde(default)]
    pub settings: Option<SpaceSettings>,
}

/// Space settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceSettings {
    /// Timeline configuration.
    #[serde(default)]
    pub timeline: Option<Timeline>,
}

/// Timeline configuration of a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// First working hour of the day.
    #[serde(default)]
    pub start_hour: u32,
    /// Last working hour of the day.
    #[serde(default)]
    pub end_hour: u32,
    /// Working days.
    #[serde(default)]
    pub work_days: Vec<String>,
    /// Planning units.
    #[serde(default)]
    pub planning_units: u32,
    /// How resources are calculated.
    #[serde(default)]
    pub calculate_resources_by: u32,
}

impl Space {
    /// Returns true if the space is archived.
    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Get the timeline settings if configured.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.settings.as_ref().and_then(|s| s.timeline.as_ref())
    }

    /// Get the parent entity UID for nested spaces.
    pub fn parent_uid(&self) -> Option<&str> {
        self.parent_entity_uid.as_deref()
    }
}

/// Parameters for creating a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSpaceParams {
    /// Space title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// External ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<u64>,
}

/// Parameters for a partial space update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSpaceParams {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New external ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<u64>,

    /// Card types allowed in the space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_card_type_ids: Option<Vec<String>>,
}

fn space_path(id: u64) -> String {
    format!("spaces/{id}")
}

#[async_trait]
impl Get for Space {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &KaitenClient, id: u64) -> Result<Envelope<Self>> {
        let request = client.new_request(Method::GET, &space_path(id), None::<&()>)?;
        client.do_json(request).await
    }
}

#[async_trait]
impl List for Space {
    #[tracing::instrument(skip(client))]
    async fn list(client: &KaitenClient) -> Result<Envelope<Vec<Self>>> {
        let request = client.new_request(Method::GET, "spaces", None::<&()>)?;
        client.do_json(request).await
    }
}

#[async_trait]
impl Create for Space {
    type Params = CreateSpaceParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &KaitenClient, params: Self::Params) -> Result<Envelope<Self>> {
        let request = client.new_request(Method::POST, "spaces", Some(&params))?;
        client.do_json(request).await
    }
}

#[async_trait]
impl Update for Space {
    type Id = u64;
    type Params = UpdateSpaceParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &KaitenClient, id: u64, params: Self::Params) -> Result<Envelope<Self>> {
        let request = client.new_request(Method::PATCH, &space_path(id), Some(&params))?;
        client.do_json(request).await
    }
}

#[async_trait]
impl Remove for Space {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn remove(client: &KaitenClient, id: u64) -> Result<Response> {
        let request = client.new_request(Method::DELETE, &space_path(id), None::<&()>)?;
        client.do_discard(request).await
    }
}
