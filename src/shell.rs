//! Persistent layout: navbar on top, the resolved page below it.

use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::components::Navbar;
use crate::config::SiteConfig;
use crate::pages;
use crate::routes::{Page, RouteTable};

#[derive(Properties, Clone, PartialEq)]
pub struct FrameProps {
    pub page: Page,
    pub table: RouteTable,
    pub site: SiteConfig,
    /// Route path that was resolved, shown by the not-found page.
    #[prop_or_default]
    pub path: String,
}

/// Navbar plus one page. Knows nothing about the browser location.
#[function_component(Frame)]
pub fn frame(props: &FrameProps) -> Html {
    html! {
        <>
            <Navbar current={props.page} table={props.table.clone()} site={props.site.clone()} />
            <main class="content" data-page={format!("{:?}", props.page)}>
                { pages::render(props.page, &props.table, &props.site, &props.path) }
            </main>
        </>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ShellProps {
    pub table: RouteTable,
    pub site: SiteConfig,
}

fn current_location() -> String {
    BrowserHistory::new().location().path().to_string()
}

/// Binds [`Frame`] to the browser history: every push/pop re-resolves
/// the location against the route table.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let location = use_state(current_location);

    {
        let location = location.clone();
        use_effect_with((), move |_| {
            let listener = BrowserHistory::new().listen(move || location.set(current_location()));
            move || drop(listener)
        });
    }

    let route = props.site.route_path(&*location).into_owned();
    let page = props.table.resolve(&route);

    {
        let title = format!("{} | {}", page.title(), props.site.title);
        use_effect_with(page, move |page| {
            tracing::debug!(?page, "page changed");
            gloo::utils::document().set_title(&title);
            || ()
        });
    }

    html! {
        <Frame {page} table={props.table.clone()} site={props.site.clone()} path={route} />
    }
}
