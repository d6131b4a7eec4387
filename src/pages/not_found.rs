use yew::prelude::*;

use crate::components::NavLink;
use crate::config::SiteConfig;
use crate::routes::{Page, RouteTable};

#[derive(Properties, Clone, PartialEq)]
pub struct NotFoundProps {
    pub table: RouteTable,
    pub site: SiteConfig,
    #[prop_or_default]
    pub path: String,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let home = props.site.href(props.table.path_of(Page::Home).unwrap_or("/"));

    html! {
        <section class="page not-found">
            <h1 class="page-title">{ "404" }</h1>
            <p>
                { "There is no page at " }
                <code>{ props.path.clone() }</code>
            </p>
            <NavLink href={home}>{ "Back to home" }</NavLink>
        </section>
    }
}
