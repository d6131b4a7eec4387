//! Training & placement cell website: a Yew single-page app with a static
//! route table, a persistent navbar and presentational member cards.

pub mod components;
pub mod config;
pub mod logging;
pub mod members;
pub mod pages;
pub mod routes;
pub mod shell;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::routes::RouteTable;
use crate::shell::Shell;

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub table: RouteTable,
    pub site: SiteConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div class="app">
            <Shell table={props.table.clone()} site={props.site.clone()} />
        </div>
    }
}
