use tally::data::Dataset;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{IncomesPage, NotFoundPage, OrdersPage, SalesPage, StocksPage};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/incomes")]
    Incomes,
    #[at("/orders")]
    Orders,
    #[at("/sales")]
    Sales,
    #[at("/stocks")]
    Stocks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a route entry resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(Route),
    View(Dataset),
}

/// One row of the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

/// The route table, redirect first.
pub static ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: "/",
        name: None,
        target: RouteTarget::Redirect(Route::Sales),
    },
    RouteEntry {
        path: "/incomes",
        name: Some("incomes"),
        target: RouteTarget::View(Dataset::Incomes),
    },
    RouteEntry {
        path: "/orders",
        name: Some("orders"),
        target: RouteTarget::View(Dataset::Orders),
    },
    RouteEntry {
        path: "/sales",
        name: Some("sales"),
        target: RouteTarget::View(Dataset::Sales),
    },
    RouteEntry {
        path: "/stocks",
        name: Some("stocks"),
        target: RouteTarget::View(Dataset::Stocks),
    },
];

impl Route {
    /// Routes shown in the navigation bar, in table order.
    pub const NAVIGATION: [Route; 4] = [Route::Incomes, Route::Orders, Route::Sales, Route::Stocks];

    fn entry(&self) -> Option<&'static RouteEntry> {
        let path = self.to_path();
        ROUTES.iter().find(|entry| entry.path == path)
    }

    /// Where this route redirects to, if it is a redirect.
    pub fn redirect(&self) -> Option<Route> {
        match self.entry()?.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }

    /// Follows the redirect, if any.
    pub fn resolve(self) -> Route {
        self.redirect().unwrap_or(self)
    }

    /// Symbolic name of a view route.
    pub fn name(&self) -> Option<&'static str> {
        self.entry()?.name
    }

    /// The dataset a view route renders.
    pub fn dataset(&self) -> Option<Dataset> {
        match self.entry()?.target {
            RouteTarget::View(dataset) => Some(dataset),
            RouteTarget::Redirect(_) => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    if let Some(to) = route.redirect() {
        return html! { <Redirect<Route> to={to} /> };
    }

    match route {
        Route::Incomes => html! { <IncomesPage /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::Sales => html! { <SalesPage /> },
        Route::Stocks => html! { <StocksPage /> },
        Route::Root | Route::NotFound => html! { <NotFoundPage /> },
    }
}
