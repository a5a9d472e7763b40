//! Access to the items database.
//!
//! [`Gateway`] wraps a pooled sea-orm connection. Each operation checks a connection out
//! of the pool for exactly one statement; the pool takes it back whether the statement
//! succeeds or not.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryOrder, Statement,
};

use crate::config::PoolConfig;
use crate::entity::item::{self, NewItem};
use crate::error::DatabaseUnavailable;

#[derive(Clone, Debug)]
pub struct Gateway {
    conn: DatabaseConnection,
}

impl Gateway {
    /// Build a lazily connecting pool for `url`.
    ///
    /// No connection is opened here; the first statement does that, so an unreachable
    /// server is reported by the operation that needed it.
    #[tracing::instrument(skip_all, fields(max_connections = pool.max_connections))]
    pub async fn connect(url: &str, pool: &PoolConfig) -> Result<Self, DatabaseUnavailable> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(pool.max_connections)
            .acquire_timeout(Duration::from_secs(pool.acquire_timeout_secs))
            .connect_lazy(true)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Create the `items` table if it does not exist yet. Safe to call repeatedly.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), DatabaseUnavailable> {
        Migrator::up(&self.conn, None).await?;
        tracing::info!("database schema is up to date");
        Ok(())
    }

    /// Run `SELECT 1` to confirm the database answers.
    #[tracing::instrument(skip(self))]
    pub async fn probe(&self) -> Result<(), DatabaseUnavailable> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1"))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<item::Model>, DatabaseUnavailable> {
        let items = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(items)
    }

    #[tracing::instrument(skip(self, new_item), fields(name = %new_item.name))]
    pub async fn insert_item(&self, new_item: NewItem) -> Result<item::Model, DatabaseUnavailable> {
        let stored = new_item.into_active_model().insert(&self.conn).await?;
        Ok(stored)
    }
}
