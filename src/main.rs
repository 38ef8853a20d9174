mod components;
mod config;
mod error;
mod model;
mod state;
mod util;

use components::app::App;
use config::ShowConfig;
use state::LocalStore;

fn main() {
    let config = ShowConfig::load(&LocalStore);
    util::init_logging(config.level_filter());
    log::info!("game show scoreboard starting");
    yew::Renderer::<App>::new().render();
}
