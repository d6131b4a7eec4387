use placement_cell::config::SiteConfig;
use placement_cell::routes::RouteTable;
use placement_cell::{logging, App, AppProps};

fn main() {
    logging::init();

    let site = SiteConfig::embedded();
    let table = RouteTable::placement_cell();
    tracing::info!(routes = table.entries().len(), base = %site.base_path, "starting");

    yew::Renderer::<App>::with_props(AppProps { table, site }).render();
}
