//! The form controller: everything the window does, minus the widgets.

use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::bridge::Bridge;
use crate::status::{ClearTimer, StatusLine, StatusSink};
use crate::store::{self, THEME_KEY};
use crate::theme::{
    self, DEFAULT_THEME, DropdownEvent, DropdownState, THEMES, ThemeColors, ThemeSource,
};
use crate::time_value::{ParsedTime, TimeValue, parse_time};
use crate::types::{CalculationPayload, Defaults, Settings, TimeField, UserInfo};

pub const NORMALIZED_ADVISORY: &str = "Some values were normalized (minutes ≥ 60).";
pub const CALCULATION_ERROR: &str = "Error";

/// What the controller needs from a window.
pub trait FormView: StatusSink {
    fn field_text(&self, field: TimeField) -> String;
    fn set_field_text(&self, field: TimeField, text: &str);
    /// Sets the result text and makes the result area visible.
    fn show_result(&self, text: &str);
    fn set_user_info(&self, author: &str, version: &str, user: &str);
    fn set_info_visible(&self, visible: bool);
    fn set_dropdown_open(&self, open: bool);
    /// `selected` is the catalogue index and label, if the theme is known.
    /// Without it no option is marked active and the trigger label is kept.
    fn apply_theme(&self, colors: &ThemeColors, selected: Option<(usize, &str)>);
    fn focus_start(&self);
}

pub struct FormController<V: FormView, T: ClearTimer> {
    view: Rc<V>,
    bridge: Rc<dyn Bridge>,
    local_storage: Rc<RefCell<Connection>>,
    status: StatusLine<T>,
    dropdown: Cell<DropdownState>,
    current_theme: RefCell<String>,
}

impl<V: FormView + 'static, T: ClearTimer> FormController<V, T> {
    pub fn new(
        view: Rc<V>,
        bridge: Rc<dyn Bridge>,
        local_storage: Rc<RefCell<Connection>>,
        status_timer: T,
    ) -> Self {
        Self {
            view,
            bridge,
            local_storage,
            status: StatusLine::new(status_timer),
            dropdown: Cell::new(DropdownState::Closed),
            current_theme: RefCell::new(DEFAULT_THEME.to_string()),
        }
    }

    pub fn current_theme(&self) -> String {
        self.current_theme.borrow().clone()
    }

    pub fn dropdown_state(&self) -> DropdownState {
        self.dropdown.get()
    }

    pub fn show_status(&self, msg: &str) {
        self.status.show(&self.view, msg);
    }

    /// Parses a field and rewrites it as `HH:MM` if it had to be normalized.
    pub fn read_time_field(&self, field: TimeField) -> ParsedTime {
        let parsed = parse_time(&self.view.field_text(field));
        if parsed.normalized {
            self.view.set_field_text(field, &parsed.value.to_string());
        }
        parsed
    }

    pub async fn calculate(&self) {
        let mut normalized = false;
        let [start, work, lunch, ot, ct] = TimeField::ALL.map(|field| {
            let parsed = self.read_time_field(field);
            normalized |= parsed.normalized;
            parsed.value
        });
        let payload = CalculationPayload {
            start,
            work,
            lunch,
            ot,
            ct,
        };

        let result = match serde_json::to_string(&payload) {
            Ok(json) => self.bridge.calculate(&json).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(text) => {
                self.view.show_result(&text);
                self.show_status(if normalized { NORMALIZED_ADVISORY } else { "" });
            }
            Err(e) => {
                warn!("Calculation failed: {}", e);
                self.view.show_result(CALCULATION_ERROR);
            }
        }
    }

    /// Fills the form from the service defaults, then focuses the start field.
    pub async fn load_defaults(&self) {
        match self.fetch_defaults().await {
            Ok(defaults) => {
                for field in TimeField::ALL {
                    self.set_time_field(field, defaults.value(field));
                }
            }
            Err(e) => debug!("Keeping form values, defaults unavailable: {}", e),
        }
        self.view.focus_start();
    }

    async fn fetch_defaults(&self) -> crate::error::Result<Defaults> {
        let raw = self.bridge.get_defaults().await?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn set_time_field(&self, field: TimeField, value: TimeValue) {
        self.view.set_field_text(field, &value.to_string());
    }

    pub async fn open_info(&self) {
        self.view.set_info_visible(true);
        match self.bridge.get_userinfo().await {
            Ok(UserInfo {
                author,
                version,
                fullname,
            }) => self.view.set_user_info(
                &format!("Author: {}", author),
                &format!("Version: {}", version),
                &format!("Logged in as: {}", fullname),
            ),
            Err(e) => debug!("User info unavailable: {}", e),
        }
    }

    pub fn close_info(&self) {
        self.view.set_info_visible(false);
    }

    pub fn on_dropdown(&self, event: DropdownEvent) {
        let before = self.dropdown.get();
        let after = before.on(event);
        if before != after {
            self.dropdown.set(after);
            self.view.set_dropdown_open(after.is_open());
        }
    }

    /// Makes `stylesheet` the current theme and repaints the window.
    pub fn apply_theme(&self, stylesheet: &str) {
        *self.current_theme.borrow_mut() = stylesheet.to_string();
        match theme::find_theme(stylesheet) {
            Some((index, option)) => self
                .view
                .apply_theme(&option.colors, Some((index, option.label))),
            None => {
                warn!("Unknown theme {}, painting with the default", stylesheet);
                self.view.apply_theme(&theme::default_theme().colors, None);
            }
        }
    }

    pub async fn select_theme(&self, index: usize) {
        let Some(option) = THEMES.get(index) else {
            warn!("No theme at index {}", index);
            return;
        };
        self.apply_theme(option.stylesheet);
        self.on_dropdown(DropdownEvent::OptionSelected);

        if let Err(e) = store::set_item(&self.local_storage.borrow(), THEME_KEY, option.stylesheet)
        {
            warn!("Could not back up theme locally: {}", e);
        }
        if let Err(e) = self.bridge.set_theme(option.stylesheet).await {
            debug!("Settings store did not take the theme: {}", e);
        }
        info!("Theme set to {}", option.stylesheet);
    }

    /// Settings store, then local storage, then the built-in default.
    pub async fn init_theme(&self) {
        let chosen = theme::resolve_theme(move |source| self.theme_from(source)).await;
        self.apply_theme(&chosen);
    }

    async fn theme_from(&self, source: ThemeSource) -> Option<String> {
        match source {
            ThemeSource::SettingsStore => {
                let raw = match self.bridge.get_settings().await {
                    Ok(raw) => raw,
                    Err(e) => {
                        debug!("Settings store unavailable: {}", e);
                        return None;
                    }
                };
                let raw = if raw.trim().is_empty() { "{}" } else { raw.as_str() };
                match serde_json::from_str::<Settings>(raw) {
                    Ok(settings) => settings.theme,
                    Err(e) => {
                        debug!("Unreadable settings: {}", e);
                        None
                    }
                }
            }
            ThemeSource::LocalStorage => {
                match store::get_item(&self.local_storage.borrow(), THEME_KEY) {
                    Ok(theme) => theme,
                    Err(e) => {
                        warn!("Local storage unavailable: {}", e);
                        None
                    }
                }
            }
            ThemeSource::BuiltinDefault => Some(DEFAULT_THEME.to_string()),
        }
    }
}
