use std::io::Write;

use chrono::Utc;
use log::info;

pub struct WorkbenchLogger;

impl WorkbenchLogger {
    /// Installs `env_logger`. `RUST_LOG` wins when set, otherwise `level`
    /// (the configured LOG_LEVEL) is the filter.
    pub fn init(level: &str) {
        let env = env_logger::Env::default().default_filter_or(level);
        let installed = env_logger::Builder::from_env(env)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();

        if installed.is_ok() {
            info!("workbench logger initialized");
        }
    }
}
