use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Article;
use crate::routes::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Recruiter,
}

impl Role {
    fn page(self) -> Page {
        match self {
            Role::Student => Page::StudentLogin,
            Role::Recruiter => Page::RecruiterLogin,
        }
    }

    fn id_label(self) -> &'static str {
        match self {
            Role::Student => "Roll number",
            Role::Recruiter => "Registered email",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoginFormProps {
    pub role: Role,
}

/// Sign-in form stub. Submitting never sends or stores credentials; it
/// only reports that sign-in is not available from this site.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let role = props.role;
    let username = use_state(String::new);
    let notice = use_state(|| None::<String>);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty() {
                notice.set(Some(format!("Enter your {}.", role.id_label().to_lowercase())));
                return;
            }
            tracing::info!(?role, "sign-in attempted on stub form");
            notice.set(Some(
                "Online sign-in is not available yet. Please contact the placement cell.".into(),
            ));
        })
    };

    html! {
        <Article page={role.page()}>
            <form class="login" {onsubmit}>
                <label>
                    { role.id_label() }
                    <input type="text" autocomplete="username" value={(*username).clone()} oninput={on_username} />
                </label>
                <label>
                    { "Password" }
                    <input type="password" autocomplete="current-password" />
                </label>
                <button type="submit" class="btn">{ "Sign in" }</button>
            </form>
            if let Some(msg) = &*notice {
                <p class="notice">{ msg.clone() }</p>
            }
        </Article>
    }
}

#[function_component(StudentLogin)]
pub fn student_login() -> Html {
    html! { <LoginForm role={Role::Student} /> }
}

#[function_component(RecruiterLogin)]
pub fn recruiter_login() -> Html {
    html! { <LoginForm role={Role::Recruiter} /> }
}
