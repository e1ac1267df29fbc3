//! # Record Client
//!
//! Provides a high-level API for interacting with the record actor.
//! It wraps a `ResourceClient<TaxRecord>` and implements [`RecordService`].

use crate::clients::{ActorClient, RecordService};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{TaxRecord, TaxRecordCreate, Tid};
use crate::record_actor::ServiceError;
use async_trait::async_trait;

/// Client for interacting with the record actor.
#[derive(Clone)]
pub struct RecordClient {
    inner: ResourceClient<TaxRecord>,
}

impl RecordClient {
    pub fn new(inner: ResourceClient<TaxRecord>) -> Self {
        Self { inner }
    }

    /// Adds a record built from a full payload; blank fields are rejected by the actor.
    pub async fn create_record(&self, params: TaxRecordCreate) -> Result<Tid, ServiceError> {
        self.create(params).await
    }
}

#[async_trait]
impl ActorClient<TaxRecord> for RecordClient {
    type Error = ServiceError;

    fn inner(&self) -> &ResourceClient<TaxRecord> {
        &self.inner
    }

    /// Entity errors raised by the actor are passed through as they were raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ServiceError>() {
                Ok(service_error) => *service_error,
                Err(other) => ServiceError::ActorCommunicationError(other.to_string()),
            },
            other => ServiceError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl RecordService for RecordClient {
    async fn list_all(&self) -> Result<Vec<TaxRecord>, ServiceError> {
        self.list().await
    }

    async fn add(
        &self,
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> Result<Tid, ServiceError> {
        self.create_record(TaxRecordCreate::new(first_name, last_name, address))
            .await
    }

    async fn find_by_id(&self, tid: Tid) -> Result<Option<TaxRecord>, ServiceError> {
        self.get(tid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{MockClient, RequestKind};

    #[tokio::test]
    async fn test_add_sends_fields_in_order() {
        let mut mock = MockClient::<TaxRecord>::new();
        mock.expect_create().return_ok(Tid::new(4));

        let client = RecordClient::new(mock.client());
        let tid = client.add("Jane", "Doe", "1 Main St").await.unwrap();

        assert_eq!(tid, Tid::new(4));
        assert_eq!(mock.created(), vec![TaxRecordCreate::new("Jane", "Doe", "1 Main St")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_id_distinguishes_absent_from_failure() {
        let mut mock = MockClient::<TaxRecord>::new();
        mock.expect_get().return_ok(None);
        mock.expect_get().return_err(FrameworkError::ActorDropped);

        let client = RecordClient::new(mock.client());
        assert_eq!(client.find_by_id(Tid::new(999)).await, Ok(None));
        assert!(matches!(
            client.find_by_id(Tid::new(7)).await,
            Err(ServiceError::ActorCommunicationError(_))
        ));
        assert_eq!(mock.request_kinds(), vec![RequestKind::Get, RequestKind::Get]);
        assert_eq!(mock.get_ids(), vec![Tid::new(999), Tid::new(7)]);
    }

    #[test]
    fn test_map_error_unwraps_service_errors() {
        let err = RecordClient::map_error(FrameworkError::EntityError(Box::new(
            ServiceError::Validation("bad".into()),
        )));
        assert_eq!(err, ServiceError::Validation("bad".into()));

        let err = RecordClient::map_error(FrameworkError::ActorClosed);
        assert_eq!(err, ServiceError::ActorCommunicationError("Actor closed".into()));
    }
}
