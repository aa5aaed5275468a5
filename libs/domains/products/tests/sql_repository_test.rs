//! SqlProductRepository on a migrated in-memory SQLite database.

use domain_products::*;
use test_utils::TestDatabase;

fn new_product(name: &str, category_id: Option<i32>) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: 1.25,
        category_id,
    }
}

#[tokio::test]
async fn test_unique_index_maps_to_duplicate_name() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    repo.create(new_product("Cola", None)).await.unwrap();

    let result = repo.create(new_product("Cola", None)).await;
    assert!(matches!(result, Err(ProductError::DuplicateName(name)) if name == "Cola"));
    assert_eq!(repo.list(ProductFilter::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_foreign_key_maps_to_category_not_found() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    let result = repo.create(new_product("Cola", Some(5))).await;
    assert!(matches!(result, Err(ProductError::CategoryNotFound(5))));
}

#[tokio::test]
async fn test_create_resolves_category_name() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    let snacks = repo.create_category("Snacks").await.unwrap();
    let product = repo.create(new_product("Chips", Some(snacks.id))).await.unwrap();

    assert_eq!(product.price, 1.25);
    assert_eq!(product.category.as_deref(), Some("Snacks"));
    assert_eq!(repo.get_by_id(product.id).await.unwrap(), Some(product));
    assert_eq!(repo.get_category(snacks.id).await.unwrap(), Some(snacks));
}

#[tokio::test]
async fn test_exists_by_name_is_exact() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    repo.create(new_product("Sprite", None)).await.unwrap();

    assert!(repo.exists_by_name("Sprite").await.unwrap());
    assert!(!repo.exists_by_name("sprite").await.unwrap());
    assert!(!repo.exists_by_name("Sprit").await.unwrap());
}

#[tokio::test]
async fn test_search_underscore_is_literal() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    repo.create(new_product("Cola_Zero", None)).await.unwrap();
    repo.create(new_product("ColaXZero", None)).await.unwrap();

    let found = repo.list(ProductFilter::search("a_z")).await.unwrap();
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cola_Zero"]);
}

#[tokio::test]
async fn test_datastore_failure_is_a_database_error() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    db.connection().close().await.unwrap();

    let result = repo.list(ProductFilter::default()).await;
    assert!(matches!(result, Err(ProductError::Database(_))));
}

#[tokio::test]
async fn test_search_finds_non_ascii_names() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());

    repo.create(new_product("Äpfel", None)).await.unwrap();
    repo.create(new_product("Birnen", None)).await.unwrap();

    for term in ["Äp", "pfel", "PFEL", "Äpfel"] {
        let found = repo.list(ProductFilter::search(term)).await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Äpfel"], "search {term}");
    }
}
