use tally::data::Dataset;
use yew::prelude::*;

use crate::components::DatasetView;

#[function_component(IncomesPage)]
pub fn incomes_page() -> Html {
    html! { <DatasetView dataset={Dataset::Incomes} /> }
}

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    html! { <DatasetView dataset={Dataset::Orders} /> }
}

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    html! { <DatasetView dataset={Dataset::Sales} /> }
}

#[function_component(StocksPage)]
pub fn stocks_page() -> Html {
    html! { <DatasetView dataset={Dataset::Stocks} /> }
}
