use slint::{ComponentHandle, SharedString};

use crate::controller::FormView;
use crate::status::StatusSink;
use crate::theme::ThemeColors;
use crate::types::TimeField;
use crate::ui::{MainWindow, Palette};

/// [`FormView`] backed by the Slint window.
pub struct SlintView {
    ui_handle: slint::Weak<MainWindow>,
}

impl SlintView {
    pub fn new(ui_handle: slint::Weak<MainWindow>) -> Self {
        Self { ui_handle }
    }
}

fn color(rgb: u32) -> slint::Color {
    slint::Color::from_argb_encoded(0xff00_0000 | rgb)
}

impl StatusSink for SlintView {
    fn set_status(&self, text: &str) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.set_status_text(text.into());
        }
    }
}

impl FormView for SlintView {
    fn field_text(&self, field: TimeField) -> String {
        let Some(ui) = self.ui_handle.upgrade() else {
            return String::new();
        };
        let text: SharedString = match field {
            TimeField::Start => ui.get_start_time(),
            TimeField::Work => ui.get_work_time(),
            TimeField::Lunch => ui.get_lunch_time(),
            TimeField::Overtime => ui.get_ot_time(),
            TimeField::CompTime => ui.get_ct_time(),
        };
        text.to_string()
    }

    fn set_field_text(&self, field: TimeField, text: &str) {
        if let Some(ui) = self.ui_handle.upgrade() {
            let text = SharedString::from(text);
            match field {
                TimeField::Start => ui.set_start_time(text),
                TimeField::Work => ui.set_work_time(text),
                TimeField::Lunch => ui.set_lunch_time(text),
                TimeField::Overtime => ui.set_ot_time(text),
                TimeField::CompTime => ui.set_ct_time(text),
            }
        }
    }

    fn show_result(&self, text: &str) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.set_result_text(text.into());
            ui.set_result_visible(true);
        }
    }

    fn set_user_info(&self, author: &str, version: &str, user: &str) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.set_info_author(author.into());
            ui.set_info_version(version.into());
            ui.set_info_user(user.into());
        }
    }

    fn set_info_visible(&self, visible: bool) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.set_info_visible(visible);
        }
    }

    fn set_dropdown_open(&self, open: bool) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.set_theme_open(open);
        }
    }

    fn apply_theme(&self, colors: &ThemeColors, selected: Option<(usize, &str)>) {
        if let Some(ui) = self.ui_handle.upgrade() {
            let palette = ui.global::<Palette>();
            palette.set_background(color(colors.background));
            palette.set_surface(color(colors.surface));
            palette.set_text(color(colors.text));
            palette.set_muted(color(colors.muted));
            palette.set_accent(color(colors.accent));
            palette.set_error(color(colors.error));

            match selected {
                Some((index, label)) => {
                    ui.set_active_theme(index as i32);
                    ui.set_theme_label(label.into());
                }
                None => ui.set_active_theme(-1),
            }
        }
    }

    fn focus_start(&self) {
        if let Some(ui) = self.ui_handle.upgrade() {
            ui.invoke_focus_start();
        }
    }
}
