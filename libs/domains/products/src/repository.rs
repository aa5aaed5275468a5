use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, NewProduct, Product, ProductFilter};

/// Repository trait for product and category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its category resolved.
    ///
    /// Fails with `DuplicateName` when the name is taken and with
    /// `CategoryNotFound` when `category_id` does not exist.
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List products in ascending id order
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Exact, case-sensitive name lookup
    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;

    async fn create_category(&self, name: &str) -> ProductResult<Category>;

    async fn get_category(&self, id: i32) -> ProductResult<Option<Category>>;

    async fn list_categories(&self) -> ProductResult<Vec<Category>>;
}

#[derive(Debug, Clone)]
struct StoredProduct {
    name: String,
    price: f64,
    category_id: Option<i32>,
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, StoredProduct>,
    categories: BTreeMap<i32, Category>,
    last_product_id: i32,
    last_category_id: i32,
}

impl Store {
    fn resolve(&self, id: i32, stored: &StoredProduct) -> Product {
        Product {
            id,
            name: stored.name.clone(),
            price: stored.price,
            category: stored
                .category_id
                .and_then(|category_id| self.categories.get(&category_id))
                .map(|c| c.name.clone()),
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are assigned from 1 and never reused, like an auto-increment column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        if store.products.values().any(|p| p.name == input.name) {
            return Err(ProductError::DuplicateName(input.name));
        }

        if let Some(category_id) = input.category_id {
            if !store.categories.contains_key(&category_id) {
                return Err(ProductError::CategoryNotFound(category_id));
            }
        }

        store.last_product_id += 1;
        let id = store.last_product_id;
        let stored = StoredProduct {
            name: input.name,
            price: input.price,
            category_id: input.category_id,
        };
        let product = store.resolve(id, &stored);
        store.products.insert(id, stored);

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).map(|p| store.resolve(id, p)))
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        Ok(store
            .products
            .iter()
            .filter(|(_, p)| filter.matches(&p.name))
            .map(|(id, p)| store.resolve(*id, p))
            .collect())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.products.values().any(|p| p.name == name))
    }

    async fn create_category(&self, name: &str) -> ProductResult<Category> {
        let mut store = self.store.write().await;

        store.last_category_id += 1;
        let category = Category {
            id: store.last_category_id,
            name: name.to_string(),
        };
        store.categories.insert(category.id, category.clone());

        tracing::info!(category_id = category.id, "Created category");
        Ok(category)
    }

    async fn get_category(&self, id: i32) -> ProductResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> ProductResult<Vec<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, price: f64, category_id: Option<i32>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();
        let drinks = repo.create_category("Drinks").await.unwrap();

        let product = repo
            .create(new_product("Sprite", 1.5, Some(drinks.id)))
            .await
            .unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category.as_deref(), Some("Drinks"));

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_duplicate_name_error() {
        let repo = InMemoryProductRepository::new();

        repo.create(new_product("Cola", 1.0, None)).await.unwrap();

        let result = repo.create(new_product("Cola", 2.0, None)).await;
        assert!(matches!(result, Err(ProductError::DuplicateName(name)) if name == "Cola"));
        assert_eq!(repo.list(ProductFilter::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let repo = InMemoryProductRepository::new();

        repo.create(new_product("Cola", 1.0, None)).await.unwrap();

        assert!(repo.create(new_product("cola", 1.0, None)).await.is_ok());
        assert!(repo.exists_by_name("Cola").await.unwrap());
        assert!(!repo.exists_by_name("COLA").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let repo = InMemoryProductRepository::new();

        let result = repo.create(new_product("Cola", 1.0, Some(42))).await;
        assert!(matches!(result, Err(ProductError::CategoryNotFound(42))));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["Sprite", "Cola", "sprite zero"] {
            repo.create(new_product(name, 1.0, None)).await.unwrap();
        }

        let all = repo.list(ProductFilter::default()).await.unwrap();
        let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let found = repo.list(ProductFilter::search("SPRITE")).await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sprite", "sprite zero"]);
    }

    #[tokio::test]
    async fn test_delete_and_ids_are_not_reused() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(new_product("Cola", 1.0, None)).await.unwrap();

        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());
        assert_eq!(repo.get_by_id(first.id).await.unwrap(), None);

        let second = repo.create(new_product("Cola", 1.0, None)).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }
}
