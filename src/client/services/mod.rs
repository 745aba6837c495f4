pub mod api_client;
pub mod solver_output;
