use dioxus::prelude::*;
use store::RosterConfig;
use tracing::Level;

use ui::views::UserManagement;

const CONFIG: &str = include_str!("../Roster.toml");

fn main() {
    let (config, problem) = match RosterConfig::from_toml(CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (RosterConfig::default(), Some(e)),
    };

    let level = config.log.level.parse().unwrap_or(Level::INFO);
    dioxus::logger::init(level).ok();
    if let Some(e) = problem {
        tracing::warn!("{} ignored: {}", RosterConfig::filename(), e);
    }
    tracing::info!(url = %config.users_url(), backend = ?config.remote.backend, "starting");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    let config = use_context::<RosterConfig>();
    use_context_provider(|| api::Directory::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        ui::components::ToastProvider {
            UserManagement {}
        }
    }
}
