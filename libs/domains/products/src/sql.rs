use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    entity::{category, product},
    error::{ProductError, ProductResult},
    models::{Category, NewProduct, Product, ProductFilter},
    repository::ProductRepository,
};

/// SeaORM-backed repository; runs against Postgres or SQLite.
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Escape LIKE wildcards so user input only ever matches literally.
///
/// Case is left alone; both sides are folded by the database's `LOWER`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_insert_error(err: DbErr, input: &NewProduct) -> ProductError {
    match err.sql_err() {
        // Lost a race against a concurrent insert of the same name
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ProductError::DuplicateName(input.name.clone())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => match input.category_id {
            Some(id) => ProductError::CategoryNotFound(id),
            None => ProductError::Database(err),
        },
        _ => ProductError::Database(err),
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model: product::ActiveModel = input.clone().into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &input))?;

        let category = match model.category_id {
            Some(id) => category::Entity::find_by_id(id).one(&self.db).await?,
            None => None,
        };

        tracing::info!(product_id = model.id, "Created product");
        Ok((model, category).into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let row = product::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(Product::from))
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = product::Entity::find().find_also_related(category::Entity);

        if let Some(term) = filter.search_term() {
            // Qualified: categories also has a `name` column
            let name = Expr::col((product::Entity, product::Column::Name));
            query = query.filter(Expr::cust_with_exprs(
                "? LIKE LOWER(?) ESCAPE '\\'",
                [Func::lower(name).into(), Expr::val(like_pattern(term)).into()],
            ));
        }

        let rows = query
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        let count = product::Entity::find()
            .filter(product::Column::Name.eq(name))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create_category(&self, name: &str) -> ProductResult<Category> {
        let model = category::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn get_category(&self, id: i32) -> ProductResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Category::from))
    }

    async fn list_categories(&self) -> ProductResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_and_keeps_case() {
        assert_eq!(like_pattern("Sprite"), "%Sprite%");
        assert_eq!(like_pattern("Äp"), "%Äp%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
