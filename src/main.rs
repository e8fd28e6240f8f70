use clap::Parser;
use pro_catalog::core::ProfessionalSource;
use pro_catalog::utils::error::{CatalogError, ErrorSeverity};
use pro_catalog::utils::{logger, validation::Validate};
use pro_catalog::{
    CatalogEngine, CatalogPipeline, CatalogSession, CliConfig, FirebaseSource, JsonFileSource,
    LocalStorage,
};

fn build_source(config: &CliConfig) -> Box<dyn ProfessionalSource> {
    match (&config.input_file, &config.database_url) {
        (Some(path), _) => Box::new(JsonFileSource::new(path)),
        (None, url) => Box::new(
            FirebaseSource::new(url.clone().unwrap_or_default(), config.collection.clone())
                .with_auth_token(config.auth_token.clone()),
        ),
    }
}

fn exit_for(e: &CatalogError) -> ! {
    tracing::error!(
        "❌ Catalog export failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting pro-catalog");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_for(&e);
    }

    let source = build_source(&config);

    if let Some(query) = config.suggest.clone() {
        let mut session = match CatalogSession::load(&source, config.requested.as_deref()).await {
            Ok(session) => session,
            Err(e) => exit_for(&e),
        };
        session.apply_filters(&config.skill_filters);
        for suggestion in session.suggestions(&query) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    if let Some(requested) = config.requested.clone() {
        if !config.skill_filters.contains(&requested) {
            config.skill_filters.push(requested);
        }
    }

    let monitor_enabled = config.monitor;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CatalogPipeline::new(source, storage, config);
    let engine = CatalogEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Catalog exported to: {}", output_path);
            Ok(())
        }
        Err(e) => exit_for(&e),
    }
}
