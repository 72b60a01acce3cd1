//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::Envelope;

/// Partially update an existing entity.
///
/// Only the fields set in the parameters are sent.
///
/// # Example
///
/// ```ignore
/// use kaitenapi::{KaitenClient, Space, Update, UpdateSpaceParams};
///
/// let client = KaitenClient::from_env()?;
/// let updated = Space::update(
///     &client,
///     42,
///     UpdateSpaceParams {
///         title: Some("New Title".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(
        client: &KaitenClient,
        id: Self::Id,
        params: Self::Params,
    ) -> Result<Envelope<Self>>;
}
