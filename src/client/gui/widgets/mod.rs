pub mod output_panel;
pub mod status_chip;
