//! The request lifecycle behind the data-fetch helper.
//!
//! A fetch moves one [`RequestState`] through `idle → loading → success | failure`.
//! [`fetch_into`] drives that lifecycle against any [`RequestSink`]: the
//! frontend's `use_api` hook plugs Yew state handles in, tests plug in a plain
//! `RefCell<RequestState<T>>`.

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::{ApiClient, ApiError};
use crate::endpoint::Endpoint;
use crate::log::{error, info};

/// Artificial latency inserted before every mock request.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// The one error kind a fetch can end in.
///
/// Network failures, non-success statuses and undecodable bodies all land
/// here; `cause` keeps the detail for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to load {path}")]
pub struct FetchFailure {
    path: String,
    #[source]
    cause: Option<ApiError>,
}

impl FetchFailure {
    pub fn new(path: impl Into<String>, cause: Option<ApiError>) -> Self {
        Self {
            path: path.into(),
            cause,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn cause(&self) -> Option<&ApiError> {
        self.cause.as_ref()
    }
}

/// Where a request currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl Phase {
    /// Derives the phase from the three observable values.
    ///
    /// An in-flight request wins over any leftover outcome.
    pub fn from_flags(loading: bool, has_error: bool, has_data: bool) -> Self {
        match (loading, has_error, has_data) {
            (true, _, _) => Phase::Loading,
            (false, true, _) => Phase::Failure,
            (false, false, true) => Phase::Success,
            (false, false, false) => Phase::Idle,
        }
    }
}

/// The three observable values of one data-fetch helper.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchFailure>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> RequestState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the previous outcome and marks the request in flight.
    pub fn begin(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = true;
    }

    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
    }

    pub fn reject(&mut self, failure: FetchFailure) {
        self.data = None;
        self.error = Some(failure);
    }

    pub fn settle(&mut self) {
        self.loading = false;
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.loading, self.error.is_some(), self.data.is_some())
    }
}

/// Receives the transitions of a fetch.
///
/// Calls always arrive as `begin`, then at most one of `resolve` / `reject`,
/// then `settle`.
pub trait RequestSink<T> {
    fn begin(&self);
    fn resolve(&self, data: T);
    fn reject(&self, failure: FetchFailure);
    fn settle(&self);
}

impl<T> RequestSink<T> for RefCell<RequestState<T>> {
    fn begin(&self) {
        self.borrow_mut().begin();
    }

    fn resolve(&self, data: T) {
        self.borrow_mut().resolve(data);
    }

    fn reject(&self, failure: FetchFailure) {
        self.borrow_mut().reject(failure);
    }

    fn settle(&self) {
        self.borrow_mut().settle();
    }
}

impl<T, S: RequestSink<T> + ?Sized> RequestSink<T> for &S {
    fn begin(&self) {
        (**self).begin();
    }

    fn resolve(&self, data: T) {
        (**self).resolve(data);
    }

    fn reject(&self, failure: FetchFailure) {
        (**self).reject(failure);
    }

    fn settle(&self) {
        (**self).settle();
    }
}

impl<T, S: RequestSink<T> + ?Sized> RequestSink<T> for Rc<S> {
    fn begin(&self) {
        (**self).begin();
    }

    fn resolve(&self, data: T) {
        (**self).resolve(data);
    }

    fn reject(&self, failure: FetchFailure) {
        (**self).reject(failure);
    }

    fn settle(&self) {
        (**self).settle();
    }
}

// Resets `loading` however the request future exits, including being dropped.
struct SettleGuard<'a, T, S: RequestSink<T>> {
    sink: &'a S,
    _marker: PhantomData<fn(T)>,
}

impl<'a, T, S: RequestSink<T>> SettleGuard<'a, T, S> {
    fn new(sink: &'a S) -> Self {
        Self {
            sink,
            _marker: PhantomData,
        }
    }
}

impl<T, S: RequestSink<T>> Drop for SettleGuard<'_, T, S> {
    fn drop(&mut self) {
        self.sink.settle();
    }
}

/// Waits out `latency`, then reads `endpoint` through `client`.
///
/// Logs the request path before waiting and the failure, if any.
pub async fn request<C, T, L>(client: &C, endpoint: &Endpoint, latency: L) -> Result<T, FetchFailure>
where
    C: ApiClient,
    T: DeserializeOwned,
    L: Future<Output = ()>,
{
    let path = endpoint.path();
    info!("Requesting mock data from: {path}");

    latency.await;

    client.get::<T>(&path).await.map_err(|cause| {
        error!("Failed to load mock data ({}): {cause}", endpoint.file_name());
        FetchFailure::new(path, Some(cause))
    })
}

/// Starts a fetch of `endpoint` whose transitions are reported to `sink`.
///
/// `sink.begin()` runs before this function returns; the returned future
/// performs the delay and the request and always ends with `sink.settle()`.
pub fn fetch_into<C, T, S, L>(
    client: C,
    endpoint: Endpoint,
    latency: L,
    sink: S,
) -> impl Future<Output = ()>
where
    C: ApiClient,
    T: DeserializeOwned,
    S: RequestSink<T>,
    L: Future<Output = ()>,
{
    sink.begin();

    async move {
        let _settle = SettleGuard::<T, S>::new(&sink);
        match request::<C, T, L>(&client, &endpoint, latency).await {
            Ok(data) => sink.resolve(data),
            Err(failure) => sink.reject(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResult;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::future::ready;
    use futures::task::LocalSpawnExt;
    use serde_json::{Value, json};
    use std::collections::{HashMap, VecDeque};

    /// Answers each path from a fixed table.
    #[derive(Default)]
    struct MockClient {
        responses: HashMap<String, ApiResult<Value>>,
    }

    impl MockClient {
        fn with(mut self, path: &str, response: ApiResult<Value>) -> Self {
            self.responses.insert(path.to_string(), response);
            self
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for MockClient {
        async fn get<T>(&self, path: &str) -> ApiResult<T>
        where
            T: DeserializeOwned,
        {
            let value = self
                .responses
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::NotFound(format!("{path} not found"))))?;
            serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
        }
    }

    /// Hands out queued responses in call order, whatever the path.
    struct QueuedClient {
        responses: RefCell<VecDeque<Value>>,
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for Rc<QueuedClient> {
        async fn get<T>(&self, _path: &str) -> ApiResult<T>
        where
            T: DeserializeOwned,
        {
            let value = self
                .responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Network("no response queued".to_string()))?;
            serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
        }
    }

    fn sales() -> Endpoint {
        Endpoint::new("sales").unwrap()
    }

    #[test]
    fn initial_state_is_idle() {
        let state = RequestState::<Value>::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn phase_follows_flags() {
        assert_eq!(Phase::from_flags(false, false, false), Phase::Idle);
        assert_eq!(Phase::from_flags(false, false, true), Phase::Success);
        assert_eq!(Phase::from_flags(false, true, false), Phase::Failure);
        assert_eq!(Phase::from_flags(false, true, true), Phase::Failure);
        for (has_error, has_data) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(Phase::from_flags(true, has_error, has_data), Phase::Loading);
        }
    }

    #[test]
    fn begin_is_synchronous_and_clears_previous_outcome() {
        let state = RefCell::new(RequestState {
            data: Some(json!({"stale": true})),
            loading: false,
            error: Some(FetchFailure::new("/api/old.json", None)),
        });
        let client = MockClient::default().with("/api/sales.json", Ok(json!({"x": 1})));

        let pending = fetch_into(client, sales(), ready(()), &state);

        // Nothing has been polled yet
        {
            let snapshot = state.borrow();
            assert!(snapshot.loading);
            assert!(snapshot.data.is_none());
            assert!(snapshot.error.is_none());
            assert_eq!(snapshot.phase(), Phase::Loading);
        }

        block_on(pending);
        assert!(!state.borrow().loading);
    }

    #[test]
    fn success_stores_payload() {
        let state = RefCell::new(RequestState::<Value>::new());
        let client = MockClient::default().with("/api/sales.json", Ok(json!({"x": 1})));

        block_on(fetch_into(client, sales(), ready(()), &state));

        let state = state.into_inner();
        assert_eq!(state.data, Some(json!({"x": 1})));
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn sales_total_scenario() {
        let state = RefCell::new(RequestState::<Value>::new());
        let client = MockClient::default().with("/api/sales.json", Ok(json!({"total": 42})));

        block_on(fetch_into(client, sales(), ready(()), &state));

        let state = state.into_inner();
        assert_eq!(state.data.as_ref().and_then(|d| d["total"].as_i64()), Some(42));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn not_found_stores_failure() {
        let state = RefCell::new(RequestState::<Value>::new());
        let client = MockClient::default();

        block_on(fetch_into(client, sales(), ready(()), &state));

        let state = state.into_inner();
        assert!(state.data.is_none());
        assert!(!state.loading);
        let failure = state.error.expect("failure should be recorded");
        assert_eq!(failure.path(), "/api/sales.json");
        assert!(matches!(failure.cause(), Some(ApiError::NotFound(_))));
    }

    #[test]
    fn resolve_and_reject_never_leave_both_set() {
        let mut state = RequestState::<Value>::new();
        state.begin();
        state.resolve(json!([1, 2]));
        state.reject(FetchFailure::new("/api/sales.json", None));
        state.settle();
        assert!(state.data.is_none());
        assert_eq!(state.phase(), Phase::Failure);

        state.begin();
        state.resolve(json!([3]));
        state.settle();
        assert!(state.error.is_none());
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn malformed_payload_is_a_failure() {
        #[derive(Debug, serde::Deserialize)]
        struct Totals {
            #[allow(dead_code)]
            total: u64,
        }

        let state = RefCell::new(RequestState::<Totals>::new());
        let client = MockClient::default().with("/api/sales.json", Ok(json!({"total": "many"})));

        block_on(fetch_into(client, sales(), ready(()), &state));

        let state = state.into_inner();
        assert!(state.data.is_none());
        assert!(matches!(
            state.error.as_ref().and_then(|e| e.cause()),
            Some(ApiError::Parse(_))
        ));
        assert!(!state.loading);
    }

    #[test]
    fn network_error_is_a_failure() {
        let state = RefCell::new(RequestState::<Value>::new());
        let client = MockClient::default().with(
            "/api/sales.json",
            Err(ApiError::Network("connection refused".to_string())),
        );

        block_on(fetch_into(client, sales(), ready(()), &state));

        let state = state.into_inner();
        assert!(state.error.is_some());
        assert!(state.data.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn sequential_triggers_match_a_single_trigger() {
        let make_client =
            || MockClient::default().with("/api/sales.json", Ok(json!({"total": 42})));

        let once = RefCell::new(RequestState::<Value>::new());
        block_on(fetch_into(make_client(), sales(), ready(()), &once));

        let twice = RefCell::new(RequestState::<Value>::new());
        block_on(fetch_into(make_client(), sales(), ready(()), &twice));
        block_on(fetch_into(make_client(), sales(), ready(()), &twice));

        assert_eq!(once.into_inner(), twice.into_inner());
    }

    #[test]
    fn latency_completes_before_request_is_sent() {
        let state = Rc::new(RefCell::new(RequestState::<Value>::new()));
        let client = Rc::new(QueuedClient {
            responses: RefCell::new(VecDeque::from([json!({"total": 1})])),
        });
        let (release, delay) = oneshot::channel::<()>();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(fetch_into(
                client.clone(),
                sales(),
                async move {
                    let _ = delay.await;
                },
                state.clone(),
            ))
            .unwrap();

        pool.run_until_stalled();
        assert_eq!(client.responses.borrow().len(), 1);
        assert!(state.borrow().loading);

        release.send(()).unwrap();
        pool.run();
        assert!(client.responses.borrow().is_empty());
        assert_eq!(state.borrow().data, Some(json!({"total": 1})));
        assert!(!state.borrow().loading);
    }

    #[test]
    fn overlapping_triggers_last_to_settle_wins() {
        let state = Rc::new(RefCell::new(RequestState::<Value>::new()));
        let client = Rc::new(QueuedClient {
            responses: RefCell::new(VecDeque::from([json!({"call": 1}), json!({"call": 2})])),
        });
        let (release_first, first_delay) = oneshot::channel::<()>();
        let (release_second, second_delay) = oneshot::channel::<()>();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        spawner
            .spawn_local(fetch_into(
                client.clone(),
                sales(),
                async move {
                    let _ = first_delay.await;
                },
                state.clone(),
            ))
            .unwrap();
        spawner
            .spawn_local(fetch_into(
                client.clone(),
                sales(),
                async move {
                    let _ = second_delay.await;
                },
                state.clone(),
            ))
            .unwrap();

        // The second trigger settles first
        release_second.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(state.borrow().data, Some(json!({"call": 1})));

        release_first.send(()).unwrap();
        pool.run();

        let state = state.borrow();
        assert_eq!(state.data, Some(json!({"call": 2})));
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn dropped_request_still_settles() {
        let state = RefCell::new(RequestState::<Value>::new());
        let client = MockClient::default();

        let pending = fetch_into(client, sales(), futures::future::pending::<()>(), &state);
        let mut pending = Box::pin(pending);

        // Poll once so the guard is in place, then abandon the request
        let waker = futures::task::noop_waker();
        let mut cx = std::task::Context::from_waker(&waker);
        assert!(pending.as_mut().poll(&mut cx).is_pending());
        assert!(state.borrow().loading);

        drop(pending);
        assert!(!state.borrow().loading);
        assert_eq!(state.borrow().phase(), Phase::Idle);
    }
}
