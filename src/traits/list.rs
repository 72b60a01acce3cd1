//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::KaitenClient;
use crate::error::Result;
use crate::response::Envelope;

/// List every entity of a type visible to the token.
///
/// The remote order is preserved. An empty result is an empty `Vec`.
#[async_trait]
pub trait List: Sized + Send {
    /// List entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &KaitenClient) -> Result<Envelope<Vec<Self>>>;
}
