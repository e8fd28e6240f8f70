use anyhow::Context;
use clap::Parser;
use pro_catalog::config::toml_config::{SourceKind, TomlConfig};
use pro_catalog::core::{ConfigProvider, ProfessionalSource};
use pro_catalog::utils::{logger, validation::Validate};
use pro_catalog::{
    CatalogEngine, CatalogPipeline, CatalogSession, FirebaseSource, JsonFileSource, LocalStorage,
};

#[derive(Parser)]
#[command(name = "toml-catalog")]
#[command(about = "Catalog export driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "catalog.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Fetch and group, print the resulting cards, but write nothing
    #[arg(long)]
    dry_run: bool,
}

fn build_source(config: &TomlConfig) -> Box<dyn ProfessionalSource> {
    match config.source.r#type {
        SourceKind::Firebase => Box::new(
            FirebaseSource::new(
                config.source.database_url.clone().unwrap_or_default(),
                config.collection(),
            )
            .with_auth_token(config.source.auth_token.clone()),
        ),
        SourceKind::File => Box::new(JsonFileSource::new(
            config.source.path.clone().unwrap_or_default(),
        )),
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Catalog: {}", config.catalog.name);
    match config.source.r#type {
        SourceKind::Firebase => tracing::info!(
            "🔗 Source: {}/{}",
            config.source.database_url.as_deref().unwrap_or(""),
            config.collection()
        ),
        SourceKind::File => {
            tracing::info!("📄 Source: {}", config.source.path.as_deref().unwrap_or(""))
        }
    }
    if config.skill_filters().is_empty() {
        tracing::info!("🔎 Filters: all skills");
    } else {
        tracing::info!("🔎 Filters: {}", config.skill_filters().join(", "));
    }
    tracing::info!("📁 Output: {}", config.output_path());
}

async fn perform_dry_run(config: &TomlConfig, source: &dyn ProfessionalSource) -> anyhow::Result<()> {
    let mut session = CatalogSession::load(source, config.requested_skill()).await?;
    session.apply_filters(config.skill_filters());

    for group in session.groups() {
        println!("{} ({})", group.skill_name, group.professionals.len());
        for member in &group.professionals {
            println!("  - {}", member.professional.full_name());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("🚀 Starting TOML-based catalog export");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);
    let source = build_source(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return perform_dry_run(&config, source.as_ref()).await;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let mut config = config;
    if let Some(requested) = config.catalog.requested_skill.clone() {
        if !config.catalog.skill_filters.contains(&requested) {
            config.catalog.skill_filters.push(requested);
        }
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = CatalogPipeline::new(source, storage, config);
    let engine = CatalogEngine::new_with_monitoring(pipeline, monitor_enabled);

    let output_path = engine.run().await?;
    println!("✅ Catalog exported to: {}", output_path);
    Ok(())
}
