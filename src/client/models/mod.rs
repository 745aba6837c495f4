pub mod app_state;
pub mod messages;
pub mod options;
pub mod ui_state;
