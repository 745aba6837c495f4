use formula_workbench::client::gui::app::WorkbenchApp;
use formula_workbench::utils::logger::WorkbenchLogger;
use formula_workbench::{ApiClient, ClientConfig};
use iced::Application;

fn main() -> anyhow::Result<()> {
    // reads .env when present
    let config = ClientConfig::from_env()?;
    WorkbenchLogger::init(&config.log_level);

    let client = ApiClient::new(&config)?;
    WorkbenchApp::run(iced::Settings::with_flags(client))
        .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))?;
    Ok(())
}
