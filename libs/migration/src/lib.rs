pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_categories;
mod m20250301_000002_create_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_categories::Migration),
            Box::new(m20250301_000002_create_products::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        Database::connect(options).await.unwrap()
    }

    #[tokio::test]
    async fn test_migrations_apply_and_roll_back_on_sqlite() {
        let db = memory_db().await;

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("categories").await.unwrap());
        assert!(manager.has_table("products").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        assert!(!manager.has_table("products").await.unwrap());
    }

    #[tokio::test]
    async fn test_product_name_is_unique() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.unwrap();

        db.execute_unprepared("INSERT INTO products (name, price) VALUES ('Cola', 1.5)")
            .await
            .unwrap();
        let duplicate = db
            .execute_unprepared("INSERT INTO products (name, price) VALUES ('Cola', 2.0)")
            .await;

        assert!(duplicate.is_err());
    }
}
