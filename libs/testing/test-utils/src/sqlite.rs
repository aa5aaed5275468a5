//! In-memory SQLite test database.

use database::sql::{SqlConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated database private to one test.
///
/// Backed by `sqlite::memory:` on a single pooled connection, so every
/// query sees the same schema and the data disappears with the pool.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqlConfig::in_memory_sqlite())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to migrate test database");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
