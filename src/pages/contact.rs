use yew::prelude::*;

use super::students::{load_roster, roster_unavailable};
use super::{Article, SiteProps};
use crate::components::MemberGrid;
use crate::routes::Page;

#[function_component(ContactUs)]
pub fn contact_us(props: &SiteProps) -> Html {
    let site = &props.site;

    html! {
        <Article page={Page::ContactUs}>
            <dl class="contact">
                <dt>{ "Email" }</dt>
                <dd><a href={site.mailto()}>{ site.contact_email.clone() }</a></dd>
                if !site.phone.is_empty() {
                    <>
                        <dt>{ "Phone" }</dt>
                        <dd><a href={format!("tel:{}", site.phone.replace(' ', ""))}>{ site.phone.clone() }</a></dd>
                    </>
                }
            </dl>
        </Article>
    }
}

#[function_component(ReachUs)]
pub fn reach_us(props: &SiteProps) -> Html {
    let site = &props.site;

    html! {
        <Article page={Page::ReachUs}>
            if !site.address.is_empty() {
                <address>{ site.address.clone() }</address>
            }
            <p>{ "The campus is connected by road to the city centre, the nearest railway station and the airport." }</p>
        </Article>
    }
}

#[function_component(PlacementTeam)]
pub fn placement_team() -> Html {
    let roster = use_memo((), |_| load_roster());

    html! {
        <Article page={Page::PlacementTeam}>
            {
                match &*roster {
                    Some(r) => html! { <MemberGrid members={r.placement_team.clone()} /> },
                    None => roster_unavailable(),
                }
            }
        </Article>
    }
}
