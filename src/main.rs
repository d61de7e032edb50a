use dioxus_logger::tracing;
use tokio::sync::mpsc;

use logbook::{config::Config, service::rankup::RankupTrigger, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let (sender, receiver) = mpsc::unbounded_channel();
    let rankup = RankupTrigger::new(db.clone(), sender);
    let listener = startup::start_rankup_listener(receiver);

    tracing::info!(
        type_rating_policy = ?config.type_rating_policy,
        "Logbook engine ready"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    drop(rankup);
    let _ = listener.await;
}
