//! Seed command - Loads development data.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    tracing::warn!("Replacing all data with seed fixtures...");
    let report = seed::run(db.connection()).await?;

    tracing::info!(
        users = report.users,
        places = report.places,
        transactions = report.transactions,
        "Seeding completed successfully"
    );
    println!(
        "Seeded {} users, {} places and {} transactions (password: {})",
        report.users,
        report.places,
        report.transactions,
        seed::SEED_PASSWORD
    );

    db.close().await?;
    Ok(())
}
