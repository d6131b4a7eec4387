use yew::prelude::*;

use super::Article;
use crate::routes::Page;

#[function_component(PlacementStatistics)]
pub fn placement_statistics() -> Html {
    html! {
        <Article page={Page::PlacementStatistics}>
            <p>{ "Year-wise placement figures for each programme are published here after every season." }</p>
        </Article>
    }
}

#[function_component(Achievements)]
pub fn achievements() -> Html {
    html! {
        <Article page={Page::Achievements}>
            <p>{ "Highlights from students and alumni: competitions, publications and awards." }</p>
        </Article>
    }
}
