use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use timecalc::bridge::Bridge;
use timecalc::config::AppConfig;
use timecalc::service::LocalService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config: {}", e);
        AppConfig::default()
    });

    let storage_path = AppConfig::local_storage_path()
        .inspect_err(|e| warn!("No local storage location: {}", e))
        .ok();
    let conn = timecalc::store::open_or_memory(storage_path.as_deref())?;
    let conn = Rc::new(RefCell::new(conn));

    let bridge: Rc<dyn Bridge> = Rc::new(LocalService::new(config, AppConfig::settings_path()?));

    let ui = timecalc::ui::MainWindow::new()?;

    let controller = timecalc::ui_setup::initialize_ui_and_data(&ui, bridge, conn)?;

    timecalc::event_handlers::setup_event_handlers(controller, &ui);

    info!("Timecalc started");
    ui.run()?;
    Ok(())
}
