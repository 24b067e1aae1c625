use clap::Parser;
use figma_tokens::utils::logger;
use figma_tokens::{run_with, CliArgs, FigmaClient, LocalStorage};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let storage = LocalStorage::new(args.output_dir.clone());
    let result = run_with(
        |name| std::env::var(name).ok(),
        |config| args.apply(config),
        FigmaClient::from_config,
        storage,
    )
    .await;

    match result {
        Ok(report) => {
            tracing::info!("Extracted {} tokens", report.tokens_extracted);
            println!("Done: {}", report.files_written.join(", "));
        }
        Err(e) => {
            tracing::error!("Token export failed: {} (category: {:?})", e, e.category());
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("Error: {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
