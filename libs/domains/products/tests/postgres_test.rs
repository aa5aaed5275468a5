//! SqlProductRepository against a real Postgres container.
//!
//! Run with `cargo test -p domain_products -- --ignored` on a host with Docker.

use domain_products::*;
use test_utils::{PostgresTestDatabase, TestDataBuilder};

fn new_product(name: String, category_id: Option<i32>) -> NewProduct {
    NewProduct {
        name,
        price: 9.99,
        category_id,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_index_reports_duplicate_name() {
    let db = PostgresTestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_unique_index");

    let name = builder.name("product", "cola");
    repo.create(new_product(name.clone(), None)).await.unwrap();

    // Bypasses the service's pre-check, so only the index stands in the way
    let result = repo.create(new_product(name, None)).await;
    assert!(matches!(result, Err(ProductError::DuplicateName(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_foreign_key_reports_unknown_category() {
    let db = PostgresTestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_foreign_key");

    let result = repo
        .create(new_product(builder.name("product", "orphan"), Some(404)))
        .await;
    assert!(matches!(result, Err(ProductError::CategoryNotFound(404))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_and_category_join() {
    let db = PostgresTestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    let drinks = repo.create_category("Drinks").await.unwrap();
    repo.create(new_product("Sprite".to_string(), Some(drinks.id)))
        .await
        .unwrap();
    repo.create(new_product("Cola".to_string(), None)).await.unwrap();

    let found = repo.list(ProductFilter::search("SPR")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Sprite");
    assert_eq!(found[0].category.as_deref(), Some("Drinks"));

    let all = repo.list(ProductFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_folds_non_ascii_case() {
    let db = PostgresTestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    repo.create(new_product("Äpfel".to_string(), None)).await.unwrap();

    let found = repo.list(ProductFilter::search("äP")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Äpfel");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_uses_affected_rows() {
    let db = PostgresTestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    let product = repo
        .create(new_product("Fanta".to_string(), None))
        .await
        .unwrap();

    assert!(repo.delete(product.id).await.unwrap());
    assert!(!repo.delete(product.id).await.unwrap());
    assert_eq!(repo.get_by_id(product.id).await.unwrap(), None);
}
