//! Create trait for adding entities.

use async_trait::async_trait;

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::Envelope;

/// Create a new entity.
///
/// Validation of the parameters is left to the API.
#[async_trait]
pub trait Create: Sized {
    /// Parameters for the new entity.
    type Params;

    /// Create the entity and return it as stored by the API.
    async fn create(client: &KaitenClient, params: Self::Params) -> Result<Envelope<Self>>;
}
