//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::Envelope;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use kaitenapi::{KaitenClient, Space, Get};
///
/// let client = KaitenClient::from_env()?;
/// let space = Space::get(&client, 42).await?.into_data();
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &KaitenClient, id: Self::Id) -> Result<Envelope<Self>>;
}
