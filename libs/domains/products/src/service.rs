use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    Category, CreateCategory, CreateProduct, NewProduct, Product, ProductFilter,
};
use crate::price::Price;
use crate::repository::ProductRepository;

/// Service layer for catalog business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, optionally narrowed by a name search
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a product.
    ///
    /// Checks run in a fixed order and the first failure wins: name
    /// validation, duplicate name, price, category. Nothing is written
    /// unless every check passes.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(&input.name).await? {
            return Err(ProductError::DuplicateName(input.name));
        }

        let price = Price::parse(&input.price)?;

        if let Some(category_id) = input.category_id {
            if self.repository.get_category(category_id).await?.is_none() {
                return Err(ProductError::CategoryNotFound(category_id));
            }
        }

        self.repository
            .create(NewProduct {
                name: input.name,
                price: price.value(),
                category_id: input.category_id,
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<Category>> {
        self.repository.list_categories().await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: CreateCategory) -> ProductResult<Category> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create_category(&input.name).await
    }
}
