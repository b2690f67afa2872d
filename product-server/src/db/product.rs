//! Product queries

use shared::PageRequest;
use shared::models::{Product, ProductFields, ProductFilter};
use sqlx::MySqlPool;

use super::query_builder::QueryBuilder;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const PRODUCT_COLUMNS: &str = "product_id, product_name, description, price, stock, \
     category_id, image_url, created_at, updated_at";

/// Translate list filters into WHERE conditions. Absent filters add nothing.
pub fn filter_query(filter: &ProductFilter) -> QueryBuilder {
    let mut builder = QueryBuilder::new();
    if let Some(search) = &filter.search {
        builder.add_search_condition(&["product_name", "description"], search);
    }
    if let Some(min) = filter.min_price {
        builder.add_condition("price >= ?").bind_decimal(min);
    }
    if let Some(max) = filter.max_price {
        builder.add_condition("price <= ?").bind_decimal(max);
    }
    if let Some(category_id) = filter.category_id {
        builder.add_condition("category_id = ?").bind_i64(category_id);
    }
    builder
}

/// Insert a product; both timestamps are set by the database. Returns the new id.
pub async fn insert(pool: &MySqlPool, fields: &ProductFields) -> Result<i64, BoxError> {
    let result = sqlx::query(
        "INSERT INTO products \
         (product_name, description, price, stock, category_id, image_url, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, NOW(3), NOW(3))",
    )
    .bind(&fields.product_name)
    .bind(&fields.description)
    .bind(fields.price)
    .bind(fields.stock)
    .bind(fields.category_id)
    .bind(&fields.image_url)
    .execute(pool)
    .await?;
    Ok(i64::try_from(result.last_insert_id())?)
}

/// Count rows matching the filters
pub async fn count(pool: &MySqlPool, filter: &ProductFilter) -> Result<u64, BoxError> {
    let builder = filter_query(filter);
    let sql = format!(
        "SELECT COUNT(*) FROM products{}",
        builder.build_where_clause()
    );
    let total: i64 = builder
        .apply_bindings_scalar(sqlx::query_scalar(&sql))
        .fetch_one(pool)
        .await?;
    Ok(u64::try_from(total)?)
}

/// Page query. Rows created in the same millisecond fall back to id order,
/// so OFFSET paging never repeats or skips a row.
fn page_sql(where_clause: &str) -> String {
    format!(
        "SELECT {PRODUCT_COLUMNS} FROM products{where_clause} \
         ORDER BY created_at DESC, product_id DESC LIMIT ? OFFSET ?"
    )
}

/// One page of matching rows, newest first
pub async fn find_page(
    pool: &MySqlPool,
    filter: &ProductFilter,
    page: PageRequest,
) -> Result<Vec<Product>, BoxError> {
    let builder = filter_query(filter);
    let sql = page_sql(&builder.build_where_clause());
    let rows = builder
        .apply_bindings_as(sqlx::query_as::<_, Product>(&sql))
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &MySqlPool, id: i64) -> Result<Option<Product>, BoxError> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Overwrite every mutable column. Returns false when no row has this id.
pub async fn update(pool: &MySqlPool, id: i64, fields: &ProductFields) -> Result<bool, BoxError> {
    let rows = sqlx::query(
        "UPDATE products SET product_name = ?, description = ?, price = ?, stock = ?, \
         category_id = ?, image_url = ?, updated_at = NOW(3) WHERE product_id = ?",
    )
    .bind(&fields.product_name)
    .bind(&fields.description)
    .bind(fields.price)
    .bind(fields.stock)
    .bind(fields.category_id)
    .bind(&fields.image_url)
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();
    Ok(rows > 0)
}

/// Returns false when no row has this id
pub async fn delete(pool: &MySqlPool, id: i64) -> Result<bool, BoxError> {
    let rows = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::query_builder::QueryValue;
    use rust_decimal::Decimal;

    #[test]
    fn test_no_filters_no_where_clause() {
        let builder = filter_query(&ProductFilter::default());
        assert_eq!(builder.build_where_clause(), "");
    }

    #[test]
    fn test_all_filters_combined_with_and() {
        let filter = ProductFilter {
            search: Some("widget".into()),
            min_price: Some(Decimal::from(10)),
            max_price: Some(Decimal::from(50)),
            category_id: Some(3),
        };
        let builder = filter_query(&filter);
        assert_eq!(
            builder.build_where_clause(),
            " WHERE (product_name LIKE ? OR description LIKE ?) \
             AND price >= ? AND price <= ? AND category_id = ?"
        );
        assert_eq!(
            builder.bindings(),
            &[
                QueryValue::Text("%widget%".into()),
                QueryValue::Text("%widget%".into()),
                QueryValue::Decimal(Decimal::from(10)),
                QueryValue::Decimal(Decimal::from(50)),
                QueryValue::Integer(3),
            ]
        );
    }

    #[test]
    fn test_single_filter() {
        let filter = ProductFilter {
            max_price: Some(Decimal::new(995, 2)),
            ..Default::default()
        };
        let builder = filter_query(&filter);
        assert_eq!(builder.build_where_clause(), " WHERE price <= ?");
        assert_eq!(
            builder.bindings(),
            &[QueryValue::Decimal(Decimal::new(995, 2))]
        );
    }

    #[test]
    fn test_page_sql_orders_newest_first_with_id_tiebreak() {
        let sql = page_sql(" WHERE category_id = ?");
        assert!(sql.starts_with("SELECT product_id, product_name,"));
        assert!(sql.ends_with(
            "FROM products WHERE category_id = ? \
             ORDER BY created_at DESC, product_id DESC LIMIT ? OFFSET ?"
        ));
    }
}
