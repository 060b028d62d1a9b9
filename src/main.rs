use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yasik::chat::{CompletionAdapter, SessionRegistry};
use yasik::cli::{commands::{Cli, Commands}, run_chat};
use yasik::config::{AppConfig, CredentialChain};
use yasik::llm::ProviderFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // The REPL shares the terminal with the log output, so keep it quiet by default.
    let default_level = match command {
        Commands::Serve => "info",
        Commands::Chat { .. } => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api_key = match CredentialChain::from_config(&config).resolve() {
        Ok(key) => key,
        Err(e) => {
            error!("❗ {}", e);
            std::process::exit(1);
        }
    };

    let provider = match ProviderFactory::create(&config.llm, &api_key) {
        Some(p) => p,
        None => {
            error!("Unknown LLM provider '{}'", config.llm.provider);
            std::process::exit(1);
        }
    };

    let adapter = CompletionAdapter::from_config(provider, &config.llm);

    match command {
        Commands::Chat { system_prompt } => run_chat(&config, &adapter, system_prompt).await,
        Commands::Serve => serve(config, adapter).await,
    }
}

async fn serve(config: AppConfig, adapter: CompletionAdapter) -> std::io::Result<()> {
    info!("Starting yasik chat server...");

    let registry = web::Data::new(SessionRegistry::from_config(&config.chat));
    let adapter = web::Data::new(adapter);
    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .app_data(adapter.clone())
            .configure(yasik::api::routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
