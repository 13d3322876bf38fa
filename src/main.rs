use clap::Parser;
use rxnorm_lookup::utils::logger;
use rxnorm_lookup::{execute, CliConfig, Result, RxNormClient};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Lookup failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: &CliConfig) -> Result<String> {
    let client_config = config.client_config()?;
    tracing::debug!("Using RxNorm at {}", client_config.base_url);

    let client = RxNormClient::from_config(&client_config)?;
    let output = execute(&client, &config.command).await?;
    Ok(serde_json::to_string_pretty(&output)?)
}
