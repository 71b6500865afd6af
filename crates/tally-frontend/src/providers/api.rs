use tally::api::HttpApiClient;
use yew::prelude::*;

use crate::config;

/// Shares one configured API client with every view.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiContext {
    pub client: HttpApiClient,
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let context = use_memo((), |_| ApiContext { client: create() });

    html! {
        <ContextProvider<ApiContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

/// The client from the nearest [`ApiProvider`], or a freshly configured one.
#[hook]
pub fn use_api_client() -> HttpApiClient {
    use_context::<ApiContext>()
        .map(|context| context.client)
        .unwrap_or_else(create)
}

/// Create a new instance of the API client rooted at the configured base path.
pub fn create() -> HttpApiClient {
    HttpApiClient::new(config::api_root())
}
