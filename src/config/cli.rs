use crate::config::client_config::ClientConfig;
use crate::core::command::LookupCommand;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rxnorm")]
#[command(about = "Look up drugs in the RxNorm REST service")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with base_url, timeout_seconds and user_agent")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the RxNorm base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Override the request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: LookupCommand,
}

impl CliConfig {
    /// Config file first, then command-line overrides on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
