use player_service::config::{Config, DatabaseConfig, ServerConfig};
use player_service::startup::Application;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub db: mongodb::Database,
}

impl TestApp {
    /// Spawn the service on a random port against a throwaway database.
    ///
    /// Requires a reachable MongoDB at TEST_MONGODB_URI (defaults to a local
    /// instance); each spawn gets its own database so tests stay isolated.
    pub async fn spawn() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("players_test_{}", uuid::Uuid::new_v4());

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            database: DatabaseConfig {
                url: Secret::new(uri.clone()),
                db_name: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Seeding handle, independent of the connection under test.
        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("Failed to connect to MongoDB");
        let db = client.database(&db_name);

        // Wait for the server to start accepting requests.
        let http = reqwest::Client::new();
        let probe_url = format!("{}/node", address);
        for _ in 0..50 {
            if http.get(&probe_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, db }
    }

    pub async fn cleanup(&self) {
        self.db.drop(None).await.ok();
    }
}
