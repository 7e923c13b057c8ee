use std::rc::Rc;
use tracing::error;

use crate::theme::DropdownEvent;
use crate::ui_setup::AppController;

fn spawn(task: impl std::future::Future<Output = ()> + 'static) {
    if let Err(e) = slint::spawn_local(task) {
        error!("Could not schedule UI task: {}", e);
    }
}

pub fn setup_event_handlers(controller: Rc<AppController>, ui: &crate::ui::MainWindow) {
    let controller_calc = controller.clone();
    ui.on_calculate(move || {
        let controller = controller_calc.clone();
        spawn(async move { controller.calculate().await });
    });

    let controller_info = controller.clone();
    ui.on_open_info(move || {
        let controller = controller_info.clone();
        spawn(async move { controller.open_info().await });
    });

    let controller_close = controller.clone();
    ui.on_close_info(move || controller_close.close_info());

    let controller_trigger = controller.clone();
    ui.on_theme_trigger_clicked(move || {
        controller_trigger.on_dropdown(DropdownEvent::TriggerClicked);
    });

    let controller_select = controller.clone();
    ui.on_theme_selected(move |index| {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        let controller = controller_select.clone();
        spawn(async move { controller.select_theme(index).await });
    });

    let controller_outside = controller.clone();
    ui.on_outside_clicked(move || {
        controller_outside.on_dropdown(DropdownEvent::ClickedOutside);
    });

    ui.on_escape_pressed(move || {
        controller.on_dropdown(DropdownEvent::EscapePressed);
    });
}
