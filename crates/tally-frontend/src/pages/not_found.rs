use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-8 max-w-4xl mx-auto text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{ "404 Not Found" }</h1>
            <p class="text-gray-600 mb-6">{ "There is no page at this address." }</p>
            <Link<Route> to={Route::Sales} classes={classes!("text-blue-600", "hover:underline")}>
                { "Go to sales" }
            </Link<Route>>
        </div>
    }
}
