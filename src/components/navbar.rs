use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::routes::{Page, RouteTable, Section};

#[derive(Properties, Clone, PartialEq)]
pub struct NavLinkProps {
    pub href: String,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after an in-app navigation, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onnavigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the history API instead of reloading.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            // let the browser handle new-tab / new-window clicks
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            e.prevent_default();
            BrowserHistory::new().push(href.clone());
            gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0);
            if let Some(cb) = &onnavigate {
                cb.emit(());
            }
        })
    };

    let aria_current: Option<AttrValue> = props.active.then(|| AttrValue::from("page"));

    html! {
        <a
            class={classes!("nav-link", props.class.clone(), props.active.then_some("active"))}
            href={props.href.clone()}
            aria-current={aria_current}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub table: RouteTable,
    pub site: SiteConfig,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let home_href = props.site.href(props.table.path_of(Page::Home).unwrap_or("/"));

    let sections = Section::ALL.iter().map(|&section| {
        let links = props.table.section_entries(section).map(|entry| {
            html! {
                <li key={entry.path}>
                    <NavLink
                        href={props.site.href(entry.path)}
                        active={entry.page == props.current}
                        onnavigate={close.clone()}
                    >
                        { entry.page.title() }
                    </NavLink>
                </li>
            }
        });
        let here = props.current.section() == Some(section);

        html! {
            <li class={classes!("nav-section", here.then_some("current"))}>
                <span class="nav-section-label">{ section.label() }</span>
                <ul class="nav-dropdown">
                    { for links }
                </ul>
            </li>
        }
    });

    html! {
        <nav class="navbar" aria-label="Main navigation">
            <div class="navbar-top">
                <NavLink
                    class={classes!("navbar-brand")}
                    href={home_href}
                    active={props.current == Page::Home}
                    onnavigate={close.clone()}
                >
                    { props.site.title.clone() }
                </NavLink>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={(*open).to_string()}
                    onclick={toggle}
                >
                    { "☰" }
                </button>
            </div>
            <ul class={classes!("nav-sections", (*open).then_some("open"))}>
                { for sections }
            </ul>
        </nav>
    }
}
