pub mod bridge;
pub mod calc;
pub mod config;
pub mod controller;
pub mod error;
pub mod event_handlers;
pub mod service;
pub mod status;
pub mod store;
pub mod theme;
pub mod time_value;
pub mod types;
pub mod ui_setup;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_support;

pub mod ui {
    slint::include_modules!();
}
