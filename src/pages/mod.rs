//! Page components, one per [`Page`].

mod about;
mod contact;
mod login;
mod not_found;
mod recruiters;
mod statistics;
mod students;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::routes::{Page, RouteTable};

pub use about::*;
pub use contact::*;
pub use login::*;
pub use not_found::*;
pub use recruiters::*;
pub use statistics::*;
pub use students::*;

/// Render the component bound to `page`. `path` is the resolved route
/// path, only read by the not-found page.
pub fn render(page: Page, table: &RouteTable, site: &SiteConfig, path: &str) -> Html {
    match page {
        Page::Home => html! { <Home table={table.clone()} site={site.clone()} /> },
        Page::Invitation => html! { <Invitation /> },
        Page::ChairmanMessage => html! { <ChairmanMessage /> },
        Page::DirectorMessage => html! { <DirectorMessage /> },
        Page::WhyRecruit => html! { <WhyRecruit /> },
        Page::Brochure => html! { <Brochure /> },
        Page::PlacementStatistics => html! { <PlacementStatistics /> },
        Page::PlacementProcedure => html! { <PlacementProcedure /> },
        Page::RecruiterGuidelines => html! { <RecruiterGuidelines /> },
        Page::PastRecruiters => html! { <PastRecruiters /> },
        Page::AipcNorms => html! { <AipcNorms /> },
        Page::Achievements => html! { <Achievements /> },
        Page::Prospective => html! { <Prospective /> },
        Page::StudentGuidelines => html! { <StudentGuidelines /> },
        Page::Internships => html! { <Internships /> },
        Page::Jaf => html! { <Jaf site={site.clone()} /> },
        Page::Iaf => html! { <Iaf site={site.clone()} /> },
        Page::ContactUs => html! { <ContactUs site={site.clone()} /> },
        Page::ReachUs => html! { <ReachUs site={site.clone()} /> },
        Page::PlacementTeam => html! { <PlacementTeam /> },
        Page::CareerCounselling => html! { <CareerCounselling /> },
        Page::StudentLogin => html! { <StudentLogin /> },
        Page::RecruiterLogin => html! { <RecruiterLogin /> },
        Page::NotFound => html! {
            <NotFound table={table.clone()} site={site.clone()} path={path.to_string()} />
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SiteProps {
    pub site: SiteConfig,
}

#[derive(Properties, Clone, PartialEq)]
pub struct RoutedProps {
    pub table: RouteTable,
    pub site: SiteConfig,
}

#[derive(Properties, PartialEq)]
pub struct ArticleProps {
    pub page: Page,
    #[prop_or_default]
    pub children: Children,
}

/// Common page wrapper: heading from the page title, then the body.
#[function_component(Article)]
pub fn article(props: &ArticleProps) -> Html {
    html! {
        <article class="page">
            <h1 class="page-title">{ props.page.title() }</h1>
            { for props.children.iter() }
        </article>
    }
}
