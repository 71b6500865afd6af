use tally::fetch::FetchFailure;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    pub label: AttrValue,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex items-center justify-center py-12">
            <div class="flex items-center space-x-2">
                <svg class="animate-spin h-6 w-6 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                <span class="text-gray-600">{ &props.label }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub failure: FetchFailure,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let on_retry = props.on_retry.reform(|_: MouseEvent| ());

    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-6">
            <h2 class="text-lg font-medium text-red-800 mb-2">{ "⚠️ Error Loading Data" }</h2>
            <p class="text-red-700">{ props.failure.to_string() }</p>
            {
                if let Some(cause) = props.failure.cause() {
                    html! { <p class="text-sm text-red-600 mt-1">{ cause.to_string() }</p> }
                } else {
                    html! {}
                }
            }
            <button
                class="mt-4 px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                onclick={on_retry}
            >
                { "Retry" }
            </button>
        </div>
    }
}
