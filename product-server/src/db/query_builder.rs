use rust_decimal::Decimal;
use sqlx::MySql;
use sqlx::mysql::MySqlArguments;
use sqlx::query::{QueryAs, QueryScalar};

/// Query builder for constructing SQL queries with dynamic WHERE conditions
#[derive(Debug)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<QueryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Add a condition; its placeholders are filled by the binds that follow
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add an integer binding
    pub fn bind_i64(&mut self, value: i64) -> &mut Self {
        self.bindings.push(QueryValue::Integer(value));
        self
    }

    /// Add a decimal binding
    pub fn bind_decimal(&mut self, value: Decimal) -> &mut Self {
        self.bindings.push(QueryValue::Decimal(value));
        self
    }

    /// Add a substring match over several fields, OR-ed together.
    /// LIKE wildcards in `search` match literally.
    pub fn add_search_condition(&mut self, fields: &[&str], search: &str) -> &mut Self {
        let field_conditions: Vec<String> = fields
            .iter()
            .map(|field| format!("{} LIKE ?", field))
            .collect();

        let condition = format!("({})", field_conditions.join(" OR "));
        self.conditions.push(condition);

        let search_pattern = format!("%{}%", escape_like(search));
        for _ in fields {
            self.bindings.push(QueryValue::Text(search_pattern.clone()));
        }

        self
    }

    /// Build WHERE clause (empty if no conditions)
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn bindings(&self) -> &[QueryValue] {
        &self.bindings
    }

    /// Apply bindings to a SQLx query_as
    pub fn apply_bindings_as<'a, 'b, O>(
        &'b self,
        mut query: QueryAs<'a, MySql, O, MySqlArguments>,
    ) -> QueryAs<'a, MySql, O, MySqlArguments>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s),
                QueryValue::Integer(i) => query.bind(*i),
                QueryValue::Decimal(d) => query.bind(*d),
            };
        }
        query
    }

    /// Apply bindings to a SQLx query_scalar
    pub fn apply_bindings_scalar<'a, 'b, O>(
        &'b self,
        mut query: QueryScalar<'a, MySql, O, MySqlArguments>,
    ) -> QueryScalar<'a, MySql, O, MySqlArguments>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s),
                QueryValue::Integer(i) => query.bind(*i),
                QueryValue::Decimal(d) => query.bind(*d),
            };
        }
        query
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape `\`, `%` and `_` for MySQL's default LIKE escape character
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_where_clause() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.build_where_clause(), "");
        assert!(builder.bindings().is_empty());
    }

    #[test]
    fn test_multiple_conditions() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("price >= ?")
            .bind_decimal(Decimal::from(10))
            .add_condition("category_id = ?")
            .bind_i64(3);
        assert_eq!(
            builder.build_where_clause(),
            " WHERE price >= ? AND category_id = ?"
        );
        assert_eq!(
            builder.bindings(),
            &[QueryValue::Decimal(Decimal::from(10)), QueryValue::Integer(3)]
        );
    }

    #[test]
    fn test_search_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_search_condition(&["product_name", "description"], "widget");
        assert_eq!(
            builder.build_where_clause(),
            " WHERE (product_name LIKE ? OR description LIKE ?)"
        );
        assert_eq!(
            builder.bindings(),
            &[
                QueryValue::Text("%widget%".into()),
                QueryValue::Text("%widget%".into())
            ]
        );
    }

    #[test]
    fn test_search_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("C:\\tmp"), "C:\\\\tmp");
        assert_eq!(escape_like("plain"), "plain");

        let mut builder = QueryBuilder::new();
        builder.add_search_condition(&["product_name"], "50%_off");
        assert_eq!(
            builder.bindings(),
            &[QueryValue::Text("%50\\%\\_off%".into())]
        );
    }
}
