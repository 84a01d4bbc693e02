use clap::Parser;
use results_clean::utils::{logger, validation::Validate};
use results_clean::{CleanConfig, Cli, EtlEngine, LocalStorage, ResultsPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    logger::init_cli_logger();
    tracing::debug!("Starting results-clean");

    let config = CleanConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::default();
    let pipeline = ResultsPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Created {} with results only.", output_path);
        }
        Err(e) => {
            tracing::error!("Cleanup failed: {}", e);
            eprintln!("Error: {}", e.user_friendly_message());
            eprintln!("Hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
