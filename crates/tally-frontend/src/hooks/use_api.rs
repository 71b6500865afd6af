use gloo_timers::future::sleep;
use tally::endpoint::Endpoint;
use tally::fetch::{DEFAULT_LATENCY, FetchFailure, Phase, RequestSink, fetch_into};
use tally::serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::providers::api::use_api_client;

/// The observable values and trigger returned by [`use_api`].
#[derive(Clone, PartialEq)]
pub struct UseApiHandle {
    pub data: UseStateHandle<Option<Value>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<FetchFailure>>,
    pub fetch_data: Callback<()>,
}

impl UseApiHandle {
    pub fn phase(&self) -> Phase {
        Phase::from_flags(*self.loading, self.error.is_some(), self.data.is_some())
    }
}

// The state handles without the trigger, so the trigger can own a copy.
#[derive(Clone)]
struct StateSink {
    data: UseStateHandle<Option<Value>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<FetchFailure>>,
}

impl RequestSink<Value> for StateSink {
    fn begin(&self) {
        self.data.set(None);
        self.error.set(None);
        self.loading.set(true);
    }

    fn resolve(&self, data: Value) {
        self.error.set(None);
        self.data.set(Some(data));
    }

    fn reject(&self, failure: FetchFailure) {
        self.data.set(None);
        self.error.set(Some(failure));
    }

    fn settle(&self) {
        self.loading.set(false);
    }
}

/// Loads `/api/{endpoint}.json` on demand.
///
/// Each call site owns its state. Calling `fetch_data` while a request is in
/// flight starts a second, independent request; whichever settles last wins.
#[hook]
pub fn use_api(endpoint: Endpoint) -> UseApiHandle {
    let client = use_api_client();
    let data = use_state(|| None::<Value>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<FetchFailure>);

    let sink = StateSink {
        data: data.clone(),
        loading: loading.clone(),
        error: error.clone(),
    };

    let fetch_data = Callback::from(move |_: ()| {
        let request = fetch_into(
            client.clone(),
            endpoint.clone(),
            sleep(DEFAULT_LATENCY),
            sink.clone(),
        );
        spawn_local(request);
    });

    UseApiHandle {
        data,
        loading,
        error,
        fetch_data,
    }
}

/// [`use_api`], triggered once when the component mounts and again whenever
/// `endpoint` changes.
#[hook]
pub fn use_api_on_mount(endpoint: Endpoint) -> UseApiHandle {
    let handle = use_api(endpoint.clone());

    {
        let fetch_data = handle.fetch_data.clone();
        use_effect_with(endpoint, move |_| {
            fetch_data.emit(());
        });
    }

    handle
}
