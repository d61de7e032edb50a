use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle};

use crate::{config::Config, error::Error, model::rankup::RankupNotification};

/// Install the global tracing subscriber at the configured level
pub fn init_logging(config: &Config) -> Result<(), Error> {
    dioxus_logger::init(config.log_level).map_err(|e| Error::InternalError(e.to_string()))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Drain rankup notifications until every trigger has been dropped
pub fn start_rankup_listener(mut receiver: UnboundedReceiver<RankupNotification>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(notification) = receiver.recv().await {
            tracing::info!(
                user_id = %notification.user_id,
                previous_rank_id = ?notification.previous_rank_id,
                new_rank_id = %notification.new_rank_id,
                previous_minutes = %notification.previous_minutes,
                new_minutes = %notification.new_minutes,
                "Rankup notification"
            );
        }

        tracing::debug!("Rankup listener stopped");
    })
}
