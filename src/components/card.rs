use yew::prelude::*;

use crate::members::Member;

#[derive(Properties, Clone, PartialEq)]
pub struct MemberCardProps {
    pub member: Member,
}

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let m = &props.member;

    html! {
        <div class="team-card">
            <img class="profile-image" src={m.profile_image.clone()} alt={m.name.clone()} />
            <div class="card-content">
                <b class="member-name">{ m.name.clone() }</b>
                <div class="department">
                    <b>{ m.department.clone() }</b>
                </div>
                <div class="card-footer">
                    <a class="email" href={m.mailto()}>
                        <span class="email-icon" aria-hidden="true">{ "✉" }</span>
                        { m.email.clone() }
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MemberGridProps {
    pub members: Vec<Member>,
}

#[function_component(MemberGrid)]
pub fn member_grid(props: &MemberGridProps) -> Html {
    html! {
        <div class="team-grid">
            { for props.members.iter().map(|m| html! {
                <MemberCard key={m.email.clone()} member={m.clone()} />
            }) }
        </div>
    }
}
