use rusqlite::Connection;
use slint::{ComponentHandle, SharedString};
use std::cell::RefCell;
use std::rc::Rc;

use crate::bridge::Bridge;
use crate::controller::FormController;
use crate::theme::THEMES;
use crate::utils::format_date_label;
use crate::view::SlintView;

pub type AppController = FormController<SlintView, slint::Timer>;

/// Builds the controller for `ui` and starts the startup fetches.
///
/// The theme and the defaults load on the event loop once it runs.
pub fn initialize_ui_and_data(
    ui: &crate::ui::MainWindow,
    bridge: Rc<dyn Bridge>,
    local_storage: Rc<RefCell<Connection>>,
) -> crate::error::Result<Rc<AppController>> {
    ui.set_date_label(format_date_label(chrono::Local::now().date_naive()).into());

    let labels: Vec<SharedString> = THEMES
        .iter()
        .map(|option| SharedString::from(option.label))
        .collect();
    ui.set_theme_options(Rc::new(slint::VecModel::from(labels)).into());

    let view = Rc::new(SlintView::new(ui.as_weak()));
    let controller = Rc::new(FormController::new(
        view,
        bridge,
        local_storage,
        slint::Timer::default(),
    ));

    let theme_controller = controller.clone();
    slint::spawn_local(async move {
        theme_controller.init_theme().await;
    })?;

    let defaults_controller = controller.clone();
    slint::spawn_local(async move {
        defaults_controller.load_defaults().await;
    })?;

    Ok(controller)
}
