pub mod logger;
pub mod workbench;
