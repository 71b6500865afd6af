use tally::data::Dataset;
use tally::fetch::Phase;
use yew::prelude::*;

use crate::components::{DataTable, ErrorPanel, Spinner};
use crate::hooks::use_api_on_mount;

#[derive(Properties, PartialEq)]
pub struct DatasetViewProps {
    pub dataset: Dataset,
}

/// Loads one dataset when shown and renders it as a table.
#[function_component(DatasetView)]
pub fn dataset_view(props: &DatasetViewProps) -> Html {
    let dataset = props.dataset;
    let api = use_api_on_mount(dataset.into());

    use_effect_with(dataset, |dataset| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} · Tally", dataset.title()));
        }
    });

    let body = match (api.phase(), api.data.as_ref(), api.error.as_ref()) {
        (Phase::Loading, _, _) => html! {
            <Spinner label={format!("Loading {}...", dataset.as_str())} />
        },
        (_, _, Some(failure)) => html! {
            <ErrorPanel failure={failure.clone()} on_retry={api.fetch_data.clone()} />
        },
        (_, Some(data), _) => html! { <DataTable data={data.clone()} /> },
        _ => html! {
            <div class="text-center py-12">
                <p class="text-gray-500">{ "No data loaded" }</p>
            </div>
        },
    };

    let on_refresh = api.fetch_data.reform(|_: MouseEvent| ());

    html! {
        <div class="p-8 max-w-6xl mx-auto">
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900">{ dataset.title() }</h1>
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                    onclick={on_refresh}
                    disabled={*api.loading}
                >
                    { if *api.loading { "Loading..." } else { "Refresh" } }
                </button>
            </div>
            { body }
        </div>
    }
}
