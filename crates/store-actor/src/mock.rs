//! # Mock Store & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`StoreClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`StoreActor`](crate::StoreActor).
//! Use it to test code that *drives* a store (views, flows, orchestration) without
//! depending on store behaviour.
//!
//! | | MockClient | Real StoreActor |
//! |---|---|---|
//! | **State** | none, scripted replies | real ordered collection |
//! | **Error injection** | `return_err` | needs a failing hook |
//! | **Use case** | logic *around* the client | the entity hooks, end-to-end flows |
//!
//! ## Testing patterns
//!
//! - **Pure mock**: script every reply with [`MockClient`], call the code under test,
//!   then [`MockClient::verify`] that every expectation was consumed.
//! - **Raw channel**: [`create_mock_client`] gives you the receiving end; pull requests
//!   with [`expect_action`], [`expect_remove`] and friends, inspect them, and answer by
//!   hand. Useful when the test needs to see the request payload.
//! - **Real store**: spawn `StoreActor::new(n).0.run(ctx)` and test against live state.
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_actor::mock::MockClient;
//! use store_actor::{FrameworkError, StoreEntity};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Seat { id: u32 }
//! #[derive(Debug)] enum SeatAction {}
//! #[derive(Debug, thiserror::Error)] #[error("seat")] struct SeatError;
//!
//! #[async_trait]
//! impl StoreEntity for Seat {
//!     type Id = u32; type Action = SeatAction; type ActionResult = ();
//!     type Context = (); type Error = SeatError;
//!     fn id(&self) -> &u32 { &self.id }
//!     async fn on_merge(&mut self, _: Self, _: &()) -> Result<(), SeatError> { Ok(()) }
//!     async fn handle_action(&mut self, a: SeatAction, _: &()) -> Result<(), SeatError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_remove(4).return_ok(Some(Seat { id: 4 }));
//!     mock.expect_get(4).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.remove(4).await.unwrap(), Some(Seat { id: 4 }));
//!     assert!(matches!(client.get(4).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::{Snapshot, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, tagged with the id the request must carry (if any).
enum Expectation<T: StoreEntity> {
    Insert {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Snapshot {
        response: Result<Snapshot<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<Option<T::ActionResult>, FrameworkError>,
    },
    Remove {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Clear {
        response: Result<usize, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: StoreEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id<I: PartialEq + std::fmt::Debug>(kind: &str, expected: &I, actual: &I) {
    if expected != actual {
        panic!("{kind} expected for {expected:?}, got {actual:?}");
    }
}

/// A mock store with expectation tracking.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation panics the mock task, which surfaces to the caller as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (StoreRequest::Insert { respond_to, .. }, Some(Expectation::Insert { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        check_id("Get", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        check_id("Action", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Remove { id, respond_to }, Some(Expectation::Remove { id: expected, response })) => {
                        check_id("Remove", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Clear { respond_to }, Some(Expectation::Clear { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(|response| Expectation::Insert { response }))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Get { id, response }))
    }

    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<T, Snapshot<T>> {
        self.builder(Box::new(|response| Expectation::Snapshot { response }))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T::ActionResult>> {
        self.builder(Box::new(move |response| Expectation::Action { id, response }))
    }

    pub fn expect_remove(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Remove { id, response }))
    }

    pub fn expect_clear(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Box::new(|response| Expectation::Clear { response }))
    }

    /// Panics if any declared expectation was not consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    expectations: Queue<T>,
    wrap: Wrap<T, R>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the receiving end of its channel.
///
/// Nothing answers requests on its own: pull them with the `expect_*` helpers below and
/// reply through the returned oneshot sender.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Returns the next request if it is an `Insert`.
pub async fn expect_insert<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Action`.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<Option<T::ActionResult>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `Remove`.
pub async fn expect_remove<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `Clear`.
pub async fn expect_clear<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<usize, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Clear { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Seat {
        id: u32,
        taken: bool,
    }

    #[derive(Debug)]
    enum SeatAction {
        Take,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Seat error")]
    struct SeatError;

    #[async_trait]
    impl StoreEntity for Seat {
        type Id = u32;
        type Action = SeatAction;
        type ActionResult = bool;
        type Context = ();
        type Error = SeatError;

        fn id(&self) -> &u32 {
            &self.id
        }

        async fn on_merge(&mut self, _incoming: Self, _ctx: &()) -> Result<(), SeatError> {
            Ok(())
        }

        async fn handle_action(&mut self, action: SeatAction, _ctx: &()) -> Result<bool, SeatError> {
            match action {
                SeatAction::Take => {
                    let was_free = !self.taken;
                    self.taken = true;
                    Ok(was_free)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_raw_channel_action() {
        let (client, mut receiver) = create_mock_client::<Seat>(10);

        let task = tokio::spawn(async move { client.perform_action(3, SeatAction::Take).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, SeatAction::Take));
        responder.send(Ok(Some(true))).unwrap();

        let result = task.await.unwrap();
        assert!(matches!(result, Ok(Some(true))));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Seat>::new();
        let seat = Seat { id: 1, taken: false };

        mock.expect_insert().return_ok(seat.clone());
        mock.expect_snapshot()
            .return_ok(Snapshot::new(1, vec![seat.clone()]));
        mock.expect_clear().return_ok(1);

        let client = mock.client();
        assert_eq!(client.insert(seat.clone()).await.unwrap(), seat);
        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.items, vec![seat]);
        assert_eq!(client.clear().await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Seat>::new();
        mock.expect_clear().return_ok(0);

        let client = mock.client();
        let result = client.remove(9).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
