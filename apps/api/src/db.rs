use anyhow::Result;
use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

/// Connects to MongoDB and returns a handle to the content database.
/// Pings the deployment so a bad URI fails at startup instead of on the
/// first request.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    info!("Connecting to MongoDB...");

    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;

    info!("MongoDB connection established (database: {database})");
    Ok(db)
}
