use clap::Parser;
use domain_provisioner::utils::error::ErrorSeverity;
use domain_provisioner::utils::{logger, validation::Validate};
use domain_provisioner::{
    CliConfig, ProvisioningClient, ProvisioningError, ProvisioningRequest, TomlConfig,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting provision-domain");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Domain provisioning failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(e.severity()));
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn render_body(request: &ProvisioningRequest) -> Result<String, ProvisioningError> {
    serde_json::to_string_pretty(&request.body())
        .map_err(|e| ProvisioningError::config(format!("could not serialize request body: {}", e)))
}

async fn run(config: CliConfig) -> Result<(), ProvisioningError> {
    let config = match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(&path)?;
            config.merge_file(file)
        }
        None => config,
    };

    config.validate()?;

    let request = config.to_request()?;
    let client = ProvisioningClient::from_config(&config)?;
    let url = client.project_domains_url(&request)?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no request will be sent");
        println!("POST {}", url);
        println!("{}", render_body(&request)?);
        return Ok(());
    }

    tracing::info!(
        "Adding domain {} to project {}",
        request.domain(),
        request.project_id()
    );

    let result = client.add_project_domain(request).await?;

    tracing::info!("✅ Domain added");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
