mod calendar;
mod chat;
mod crypto;
mod donut;
mod history;
mod macro_view;
mod overview;
mod panels;
mod push_data;
mod screens;
mod styles;
mod ticker;
mod ui_config;
mod ui_render;
mod ui_text;

pub(crate) use screens::render_bootstrap;

pub(crate) use styles::{UiStyleExt, setup_custom_visuals};
pub(crate) use ticker::{TickerState, TickerStatus};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
