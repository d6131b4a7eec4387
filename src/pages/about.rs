use yew::prelude::*;

use super::{Article, RoutedProps};
use crate::components::NavLink;
use crate::routes::Page;

const QUICK_LINKS: [Page; 4] = [
    Page::Invitation,
    Page::PlacementProcedure,
    Page::PlacementStatistics,
    Page::ContactUs,
];

#[function_component(Home)]
pub fn home(props: &RoutedProps) -> Html {
    let site = &props.site;
    let quick = QUICK_LINKS
        .iter()
        .filter_map(|&page| props.table.path_of(page).map(|path| (page, path)));

    html! {
        <section class="hero">
            <h1>{ site.title.clone() }</h1>
            <p class="sub">
                { "Connecting recruiters with graduating students across every department." }
            </p>
            <div class="quick-links">
                { for quick.map(|(page, path)| html! {
                    <NavLink class={classes!("chip")} href={site.href(path)}>{ page.title() }</NavLink>
                }) }
            </div>
        </section>
    }
}

#[function_component(Invitation)]
pub fn invitation() -> Html {
    html! {
        <Article page={Page::Invitation}>
            <p>{ "The Training & Placement Cell invites organisations to participate in the campus recruitment programme for the current academic year." }</p>
            <p>{ "Recruiters may choose on-campus or virtual drives, and may hire for full-time roles, internships, or both." }</p>
        </Article>
    }
}

#[function_component(ChairmanMessage)]
pub fn chairman_message() -> Html {
    html! {
        <Article page={Page::ChairmanMessage}>
            <blockquote class="message">
                { "Our graduates are prepared to contribute from their first day. We look forward to a lasting partnership with every organisation that visits our campus." }
            </blockquote>
            <p class="signature">{ "Chairman, Training & Placement" }</p>
        </Article>
    }
}

#[function_component(DirectorMessage)]
pub fn director_message() -> Html {
    html! {
        <Article page={Page::DirectorMessage}>
            <blockquote class="message">
                { "The institute combines rigorous coursework with research and industry exposure. I welcome you to engage with our students." }
            </blockquote>
            <p class="signature">{ "Director" }</p>
        </Article>
    }
}

#[function_component(WhyRecruit)]
pub fn why_recruit() -> Html {
    let reasons = [
        "Rigorous, industry-aligned curriculum",
        "Students with internship and project experience",
        "Active research groups and innovation labs",
        "Strong alumni network across sectors",
    ];

    html! {
        <Article page={Page::WhyRecruit}>
            <ul class="reasons">
                { for reasons.iter().map(|r| html! { <li>{ *r }</li> }) }
            </ul>
        </Article>
    }
}

#[function_component(Brochure)]
pub fn brochure() -> Html {
    html! {
        <Article page={Page::Brochure}>
            <p>{ "The placement brochure summarises programmes, intake and past placement records." }</p>
            <a class="btn" href="/docs/placement-brochure.pdf" target="_blank" rel="noopener noreferrer">
                { "Download brochure (PDF)" }
            </a>
        </Article>
    }
}
