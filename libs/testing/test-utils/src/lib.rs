//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated in-memory SQLite database, one per test
//! - `PostgresTestDatabase`: migrated Postgres container (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data generation
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let product_name = builder.name("product", "main");
//! }
//! ```

mod sqlite;

#[cfg(feature = "postgres")]
mod postgres;

pub use sqlite::TestDatabase;

#[cfg(feature = "postgres")]
pub use postgres::PostgresTestDatabase;

/// Builder for test data with deterministic names
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
