pub mod client;
pub mod common;
pub mod utils;

pub use client::models::app_state::{WorkbenchState, SAMPLE_CNF};
pub use client::services::api_client::{ApiClient, FormulaBackend};
pub use common::config::ClientConfig;
pub use common::error::WorkbenchError;
pub use common::models::{GenerationOptions, SolveResponse};
