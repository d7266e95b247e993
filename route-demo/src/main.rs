//! Navigation coordinator demo: five screens driven by a single router.

mod app;
mod config;
mod model;
mod pages;

use crate::app::AppRouter;
use crate::config::DemoConfig;
use route_nexus::Application;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    config.logging.init()?;
    tracing::info!(?config, "starting route demo");

    let router = AppRouter::new();
    router.observe(|state| tracing::debug!(idle = state.is_idle(), ?state, "route state changed"))?;
    let root = router.make_view();

    Application::new().with_tick_rate(config.tick_rate).run(root)
}
