use clap::Parser;
use numval::utils::error::NumvalError;
use numval::utils::logger;
use numval::{
    AnySink, AnySource, CliConfig, Overrides, Settings, TomlConfig, ValidationEngine,
    ValidationPipeline,
};

fn fail(e: &NumvalError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = cli.config.as_deref().map(TomlConfig::from_file).transpose();
    let settings = file_config
        .and_then(|file| Settings::resolve(&Overrides::from(&cli), file.as_ref()));

    let (level, json_logs) = match &settings {
        Ok(settings) => (settings.log_level.clone(), settings.json_logs),
        Err(_) => (None, cli.log_json),
    };
    if json_logs {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    tracing::debug!("CLI config: {:?}", cli);
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let source = AnySource::select(cli.inputs.clone(), cli.file.as_deref());
    let sink = AnySink::select(settings.output_path.as_deref());
    let pipeline = ValidationPipeline::new(source, sink, settings);
    let engine = ValidationEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) if summary.exit_code() == 0 => Ok(()),
        Ok(summary) => {
            tracing::warn!("{} input(s) rejected", summary.invalid_count);
            std::process::exit(summary.exit_code());
        }
        Err(e) => fail(&e),
    }
}
