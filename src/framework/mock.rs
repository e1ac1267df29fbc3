//! # Mock Framework
//!
//! Utilities for testing clients and views in isolation.
//!
//! [`MockClient`] answers requests from a queue of expectations and records every
//! request it receives, so tests can assert both *what* was asked and *in which order*.
//! [`create_mock_client`] is the lower-level variant that hands the raw receiver to the test.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock will send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

/// The kind of a request seen by the mock, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Create,
    Get,
    List,
}

/// A request seen by the mock, with its payload.
#[derive(Debug)]
pub enum RecordedRequest<T: ActorEntity> {
    Create(T::Create),
    Get(T::Id),
    List,
}

impl<T: ActorEntity> RecordedRequest<T> {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Create(_) => RequestKind::Create,
            Self::Get(_) => RequestKind::Get,
            Self::List => RequestKind::List,
        }
    }
}

type Shared<V> = Arc<Mutex<V>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request with no
/// matching expectation panics the background task, which closes the channel;
/// the caller then observes [`FrameworkError::ActorDropped`] or
/// [`FrameworkError::ActorClosed`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<TaxRecord>::new();
/// mock.expect_list().return_ok(vec![record]);
/// mock.expect_create().return_ok(Tid::new(2));
///
/// let client = RecordClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    requests: Shared<Vec<RecordedRequest<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::new(Mutex::new(VecDeque::new()));
        let requests: Shared<Vec<RecordedRequest<T>>> = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let requests_clone = requests.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { response })) => {
                        requests_clone.lock().unwrap().push(RecordedRequest::Get(id));
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { params, respond_to },
                        Some(Expectation::Create { response }),
                    ) => {
                        requests_clone.lock().unwrap().push(RecordedRequest::Create(params));
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        requests_clone.lock().unwrap().push(RecordedRequest::List);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            requests,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// The kinds of all requests received so far, in arrival order.
    pub fn request_kinds(&self) -> Vec<RequestKind> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(RecordedRequest::kind)
            .collect()
    }

    /// IDs of all `get` requests received so far.
    pub fn get_ids(&self) -> Vec<T::Id> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| match r {
                RecordedRequest::Get(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Payloads of all `create` requests received so far.
    pub fn created(&self) -> Vec<T::Create>
    where
        T::Create: Clone,
    {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| match r {
                RecordedRequest::Create(params) => Some(params.clone()),
                _ => None,
            })
            .collect()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Shared<VecDeque<Expectation<T>>>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Shared<VecDeque<Expectation<T>>>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to hold a response back, e.g. to observe state
/// while a request is still in flight.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next message and returns it if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next message and returns it if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
