mod components;
mod config;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use components::NavBar;
use providers::ApiProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    let basename = config::base_path().map(AttrValue::from);

    html! {
        <ApiProvider>
            <BrowserRouter {basename}>
                <NavBar />
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ApiProvider>
    }
}

fn main() {
    if let Err(err) = tally::log::setup() {
        web_sys::console::error_1(&format!("Failed to setup logging: {err}").into());
    }
    tally::log::info!(base = ?config::BASE_URL, "Starting Tally");
    yew::Renderer::<App>::new().render();
}
