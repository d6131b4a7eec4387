use placement_cell::components::card::{MemberCardProps, MemberGridProps};
use placement_cell::components::{MemberCard, MemberGrid};
use placement_cell::config::SiteConfig;
use placement_cell::members::{Member, Roster};
use placement_cell::routes::{Match, Page, RouteTable};
use placement_cell::shell::{Frame, FrameProps};
use yew::ServerRenderer;

fn singh() -> Member {
    Member {
        name: "A. Singh".into(),
        department: "CSE".into(),
        email: "a@x.edu".into(),
        profile_image: "/img/a.png".into(),
    }
}

async fn render_card(member: Member) -> String {
    ServerRenderer::<MemberCard>::with_props(move || MemberCardProps { member })
        .hydratable(false)
        .render()
        .await
}

async fn render_frame(location: &str) -> String {
    let table = RouteTable::placement_cell();
    let site = SiteConfig::default();
    let page = table.resolve(location);
    let path = location.to_string();
    ServerRenderer::<Frame>::with_props(move || FrameProps { page, table, site, path })
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn card_shows_member_fields_and_mailto() {
    let html = render_card(singh()).await;

    assert!(html.contains("A. Singh"), "{html}");
    assert!(html.contains("CSE"), "{html}");
    assert!(html.contains(r#"src="/img/a.png""#), "{html}");
    assert!(html.contains(r#"alt="A. Singh""#), "{html}");
    assert!(html.contains(r#"href="mailto:a@x.edu""#), "{html}");
}

#[tokio::test]
async fn card_render_is_repeatable() {
    let first = render_card(singh()).await;
    let second = render_card(singh()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn grid_renders_one_card_per_member() {
    let members = Roster::embedded().unwrap().placement_team;
    let expected = members.len();
    let html = ServerRenderer::<MemberGrid>::with_props(move || MemberGridProps { members })
        .hydratable(false)
        .render()
        .await;
    assert_eq!(html.matches(r#"class="team-card""#).count(), expected);
}

#[tokio::test]
async fn every_route_renders_its_page_under_the_navbar() {
    let table = RouteTable::placement_cell();
    for entry in table.entries().iter().filter(|e| e.rule != Match::Fallback) {
        let html = render_frame(entry.path).await;
        assert!(html.contains(r#"class="navbar""#), "no navbar on {}", entry.path);
        let marker = format!(r#"data-page="{:?}""#, entry.page);
        assert!(html.contains(&marker), "{} did not render {:?}", entry.path, entry.page);
    }
}

#[tokio::test]
async fn unknown_route_renders_not_found_with_navbar() {
    let html = render_frame("/doesnotexist").await;
    assert!(html.contains(r#"class="navbar""#));
    assert!(html.contains(&format!(r#"data-page="{:?}""#, Page::NotFound)));
    assert!(html.contains("/doesnotexist"));
}

#[tokio::test]
async fn only_the_current_page_link_is_active() {
    let html = render_frame("/JAF").await;
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
}

#[tokio::test]
async fn team_page_lists_the_roster() {
    let html = render_frame("/PlacementTeam").await;
    let roster = Roster::embedded().unwrap();
    for m in &roster.placement_team {
        assert!(html.contains(&format!(r#"href="{}""#, m.mailto())), "missing {}", m.email);
    }
}
