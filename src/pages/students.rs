use yew::prelude::*;

use super::Article;
use crate::components::MemberGrid;
use crate::members::Roster;
use crate::routes::Page;

#[function_component(Prospective)]
pub fn prospective() -> Html {
    html! {
        <Article page={Page::Prospective}>
            <p>{ "Information for students joining the institute: programmes, eligibility for placement and how the cell supports you." }</p>
        </Article>
    }
}

#[function_component(StudentGuidelines)]
pub fn student_guidelines() -> Html {
    html! {
        <Article page={Page::StudentGuidelines}>
            <ul>
                <li>{ "Register with the cell before the season opens." }</li>
                <li>{ "Keep your resume and academic records up to date." }</li>
                <li>{ "Once selected by a company, you are placed and may not sit for further drives, except as allowed by the norms." }</li>
                <li>{ "Attend every process you have applied for; absence is reported." }</li>
            </ul>
        </Article>
    }
}

#[function_component(Internships)]
pub fn internships() -> Html {
    html! {
        <Article page={Page::Internships}>
            <p>{ "Summer and semester-long internships are arranged through the cell. Companies announce positions with the IAF." }</p>
        </Article>
    }
}

#[function_component(CareerCounselling)]
pub fn career_counselling() -> Html {
    let roster = use_memo((), |_| load_roster());

    html! {
        <Article page={Page::CareerCounselling}>
            <p>{ "Book a session with one of our counsellors for guidance on careers, higher studies and interviews." }</p>
            {
                match &*roster {
                    Some(r) => html! { <MemberGrid members={r.career_counsellors.clone()} /> },
                    None => roster_unavailable(),
                }
            }
        </Article>
    }
}

pub(super) fn load_roster() -> Option<Roster> {
    match Roster::embedded() {
        Ok(r) => Some(r),
        Err(e) => {
            tracing::error!(error = %e, "member roster rejected");
            None
        }
    }
}

pub(super) fn roster_unavailable() -> Html {
    html! { <p class="notice">{ "Team details are unavailable right now." }</p> }
}
