use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    // Root shows sales, so its link is the active one there
    let current = use_route::<Route>().map(Route::resolve);

    html! {
        <nav class="flex space-x-2 border-b border-gray-200 px-8 py-4">
            <span class="font-bold text-lg mr-6">{ "Tally" }</span>
            { for Route::NAVIGATION.iter().map(|route| {
                let classes = if current == Some(*route) {
                    "px-3 py-1.5 rounded-md bg-blue-600 text-white"
                } else {
                    "px-3 py-1.5 rounded-md text-gray-700 hover:bg-gray-100"
                };
                let title = route.dataset().map(|dataset| dataset.title()).unwrap_or_default();

                html! {
                    <Link<Route> to={*route} classes={classes!(classes)}>{ title }</Link<Route>>
                }
            }) }
        </nav>
    }
}
