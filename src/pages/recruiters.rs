use yew::prelude::*;

use super::{Article, SiteProps};
use crate::routes::Page;

#[function_component(PlacementProcedure)]
pub fn placement_procedure() -> Html {
    let steps = [
        "Company registers and submits the announcement form (JAF or IAF).",
        "The cell circulates the announcement to eligible students.",
        "Pre-placement talk and shortlisting as requested by the company.",
        "Tests, group discussions and interviews on the allotted slot.",
        "Company shares the final list of selected students with the cell.",
    ];

    html! {
        <Article page={Page::PlacementProcedure}>
            <ol class="steps">
                { for steps.iter().map(|s| html! { <li>{ *s }</li> }) }
            </ol>
        </Article>
    }
}

#[function_component(RecruiterGuidelines)]
pub fn recruiter_guidelines() -> Html {
    html! {
        <Article page={Page::RecruiterGuidelines}>
            <ul>
                <li>{ "Offer details (CTC, location, bond) must be final when the announcement is circulated." }</li>
                <li>{ "Results should be declared on the day of the interviews." }</li>
                <li>{ "Offers once made should not be withdrawn." }</li>
            </ul>
        </Article>
    }
}

#[function_component(PastRecruiters)]
pub fn past_recruiters() -> Html {
    let sectors = [
        "Software & IT services",
        "Core engineering & manufacturing",
        "Consulting & analytics",
        "Finance & banking",
        "Public sector undertakings",
        "Research & development",
    ];

    html! {
        <Article page={Page::PastRecruiters}>
            <p>{ "Organisations from the following sectors have recruited from campus:" }</p>
            <ul class="sectors">
                { for sectors.iter().map(|s| html! { <li>{ *s }</li> }) }
            </ul>
        </Article>
    }
}

#[function_component(AipcNorms)]
pub fn aipc_norms() -> Html {
    html! {
        <Article page={Page::AipcNorms}>
            <p>{ "The cell follows the norms of the All India Placement Committee for scheduling, offers and student eligibility." }</p>
        </Article>
    }
}

#[function_component(Jaf)]
pub fn jaf(props: &SiteProps) -> Html {
    html! {
        <Article page={Page::Jaf}>
            <p>{ "Fill in the Job Announcement Form and email it to the placement cell." }</p>
            <a class="btn" href="/docs/JAF.pdf" target="_blank" rel="noopener noreferrer">{ "Download JAF" }</a>
            <p>{ "Send completed forms to " }<a href={props.site.mailto()}>{ props.site.contact_email.clone() }</a></p>
        </Article>
    }
}

#[function_component(Iaf)]
pub fn iaf(props: &SiteProps) -> Html {
    html! {
        <Article page={Page::Iaf}>
            <p>{ "Fill in the Internship Announcement Form and email it to the placement cell." }</p>
            <a class="btn" href="/docs/IAF.pdf" target="_blank" rel="noopener noreferrer">{ "Download IAF" }</a>
            <p>{ "Send completed forms to " }<a href={props.site.mailto()}>{ props.site.contact_email.clone() }</a></p>
        </Article>
    }
}
