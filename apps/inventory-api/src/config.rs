//! Configuration for the Inventory API

use core_config::{AppInfo, FromEnv, app_info, env_flag, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Seed the sample catalog at startup when the store is empty
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_sample_data,
        })
    }
}
