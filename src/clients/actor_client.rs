use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Shared plumbing for typed clients over a [`ResourceClient`].
///
/// An implementor names its error type and how framework errors map onto it;
/// every request then goes out through one instrumented method per operation.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError) -> Self::Error;

    /// Sends a create payload; resolves to the identifier the actor assigned.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: T::Create) -> Result<T::Id, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// `Ok(None)` when nothing is stored under `id`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        let items = self.inner().list().await.map_err(Self::map_error)?;
        tracing::debug!(count = items.len(), "Listed");
        Ok(items)
    }
}
