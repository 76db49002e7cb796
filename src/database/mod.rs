use mongodb::{bson::doc, Client, Collection, Database};
use std::error::Error;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.app_name = Some("user-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        let mongodb = Self { db };

        // Fail fast if the server is unreachable
        mongodb.ping().await?;
        log::info!("✅ Connected to MongoDB database: {}", db_name);

        Ok(mongodb)
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/user_service_test".to_string());

        let db = MongoDB::new(&uri, "user_service_test").await;
        assert!(db.is_ok());

        let db = db.unwrap();
        assert!(db.ping().await.is_ok());
    }
}
