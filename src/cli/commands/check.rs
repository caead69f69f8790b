//! Implementation of the `boilerplate-config check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{bootstrap_subscriber, LoggerImpl};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Install the service logger described by `observability.logging`
    #[arg(long)]
    pub log: bool,
}

/// Non-secret summary of a loaded configuration
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub environment: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database: String,
    pub redis_address: String,
    pub service_name: String,
    pub log_level: String,
    pub log_format: String,
}

impl From<&Config> for CheckOutput {
    fn from(config: &Config) -> Self {
        Self {
            success: true,
            environment: config.primary.env.clone(),
            server_port: config.server.port,
            cors_allowed_origins: config.server.cors_allowed_origins.clone(),
            database: format!(
                "{}@{}:{}/{}",
                config.database.user, config.database.host, config.database.port, config.database.name
            ),
            redis_address: config.redis.address.clone(),
            service_name: config.observability.service_name.clone(),
            log_level: config.observability.logging.level.clone(),
            log_format: config.observability.logging.format.clone(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        [
            "Configuration OK".to_string(),
            format!("  environment:  {}", self.environment),
            format!("  server port:  {}", self.server_port),
            format!("  cors origins: {}", self.cors_allowed_origins.join(", ")),
            format!("  database:     {}", self.database),
            format!("  redis:        {}", self.redis_address),
            format!(
                "  logging:      {} ({}, {})",
                self.service_name, self.log_level, self.log_format
            ),
        ]
        .join("\n")
    }
}

pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), ConfigLoader::load_or_exit);

    if args.log {
        LoggerImpl::init(&config.observability.logging)?;
        tracing::info!(
            environment = %config.primary.env,
            service = %config.observability.service_name,
            "configuration check passed"
        );
    }

    output(&CheckOutput::from(&config), json_mode);
    Ok(())
}
