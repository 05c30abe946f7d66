use crate::error::AppError;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};

/// Collection name is part of the service contract, not deployment config.
const PLAYERS_COLLECTION: &str = "players";

/// Handle to the single long-lived MongoDB connection. Cloning is cheap
/// (driver handles are reference-counted) and every clone shares the same
/// underlying connection; the service never writes through it.
#[derive(Clone)]
pub struct PlayerDb {
    client: MongoClient,
    db: Database,
}

impl PlayerDb {
    /// Establish the connection and verify the server is reachable.
    ///
    /// Client construction performs no I/O, so an explicit ping runs here to
    /// make an unreachable database fail startup instead of the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        client_options.app_name = Some("player-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        let db = client.database(database);

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB is unreachable: {}", e);
                AppError::DatabaseError(e.into())
            })?;

        tracing::info!(database = %database, "Connected to MongoDB");
        Ok(Self { client, db })
    }

    /// Query the server version via the admin status command.
    pub async fn server_version(&self) -> Result<String, AppError> {
        let info = self
            .client
            .database("admin")
            .run_command(doc! { "serverStatus": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("serverStatus query failed: {}", e);
                AppError::DatabaseError(e.into())
            })?;

        let version = info.get_str("version").map_err(|e| {
            tracing::error!("serverStatus reply carried no version string: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(version.to_string())
    }

    /// Scan the players collection in full, with no filter or projection.
    /// Documents come back as-is; this service defines no schema for them.
    pub async fn list_players(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.players().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query players collection: {}", e);
            AppError::DatabaseError(e.into())
        })?;

        let players: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect players cursor: {}", e);
            AppError::DatabaseError(e.into())
        })?;

        Ok(players)
    }

    fn players(&self) -> Collection<Document> {
        self.db.collection(PLAYERS_COLLECTION)
    }
}
