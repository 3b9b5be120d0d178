use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 20;
const MAX_ATTEMPTS: u32 = 5;

/// Connects with exponential backoff so the service survives the database
/// coming up after it does.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5));

    let mut backoff = Duration::from_secs(2);

    for attempt in 1..=MAX_ATTEMPTS {
        match options.clone().connect(database_url).await {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(
                    "Database connection failed (attempt {}/{}): {}. Retrying in {:?}...",
                    attempt, MAX_ATTEMPTS, e, backoff
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => return Err(e),
        }
    }

    unreachable!("loop returns a pool or the final error")
}
