//! Remove trait for deleting entities.

use async_trait::async_trait;

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::Response;

/// Delete an entity. The response body is discarded.
#[async_trait]
pub trait Remove {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity.
    async fn remove(client: &KaitenClient, id: Self::Id) -> Result<Response>;
}
