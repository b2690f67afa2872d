//! Product Model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::number::{self, parse_decimal, parse_integer};
use crate::error::{AppError, AppResult};

/// Product entity (one row of the `products` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    /// Bare category label, not checked against any category table
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_name: Option<String>,
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "number::de_decimal",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "number::de_i32")]
    pub stock: Option<i32>,
    #[serde(default, deserialize_with = "number::de_i64")]
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
}

/// Update product payload
///
/// PUT replaces every mutable column: a field left out of the body is
/// written as NULL, not preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub product_name: Option<String>,
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "number::de_decimal",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "number::de_i32")]
    pub stock: Option<i32>,
    #[serde(default, deserialize_with = "number::de_i64")]
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
}

/// Column values written by an insert or a full-row update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub product_name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
}

fn require_name(name: Option<String>) -> AppResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(AppError::required("product_name")),
    }
}

impl ProductCreate {
    /// Validate and apply creation defaults (price 0, stock 0, image "")
    pub fn into_fields(self) -> AppResult<ProductFields> {
        Ok(ProductFields {
            product_name: require_name(self.product_name)?,
            description: self.description,
            price: Some(self.price.unwrap_or(Decimal::ZERO)),
            stock: Some(self.stock.unwrap_or(0)),
            category_id: self.category_id,
            image_url: Some(self.image_url.unwrap_or_default()),
        })
    }
}

impl ProductUpdate {
    /// Validate; no defaults are applied
    pub fn into_fields(self) -> AppResult<ProductFields> {
        Ok(ProductFields {
            product_name: require_name(self.product_name)?,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            image_url: self.image_url,
        })
    }
}

/// Search filters for the product list. Every `None` drops its predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Substring of `product_name` or `description`
    pub search: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
    /// Exact `category_id`
    pub category_id: Option<i64>,
}

impl ProductFilter {
    /// Coerce raw query-string values. Empty values count as absent;
    /// non-numeric bounds or categories are rejected. Scientific notation
    /// (`1e2`) and whole decimals for the category (`3.0`) are accepted.
    pub fn from_raw(
        q: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Self> {
        Ok(Self {
            search: q.filter(|s| !s.is_empty()).map(str::to_string),
            min_price: parse_present(min_price, "minPrice", "a number", parse_decimal)?,
            max_price: parse_present(max_price, "maxPrice", "a number", parse_decimal)?,
            category_id: parse_present(category, "category", "an integer", parse_integer)?,
        })
    }
}

fn parse_present<T>(
    raw: Option<&str>,
    field: &str,
    expected: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| AppError::invalid_format(field, expected)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_create_applies_defaults() {
        let data: ProductCreate =
            serde_json::from_str(r#"{"product_name": "Widget"}"#).unwrap();
        let fields = data.into_fields().unwrap();

        assert_eq!(fields.product_name, "Widget");
        assert_eq!(fields.description, None);
        assert_eq!(fields.price, Some(Decimal::ZERO));
        assert_eq!(fields.stock, Some(0));
        assert_eq!(fields.category_id, None);
        assert_eq!(fields.image_url, Some(String::new()));
    }

    #[test]
    fn test_create_keeps_given_values() {
        let data: ProductCreate = serde_json::from_str(
            r#"{"product_name": "Widget", "description": "blue", "price": 12.5,
                "stock": 4, "category_id": 3, "image_url": "/img/w.png"}"#,
        )
        .unwrap();
        let fields = data.into_fields().unwrap();

        assert_eq!(fields.description.as_deref(), Some("blue"));
        assert_eq!(fields.price, Some(Decimal::new(125, 1)));
        assert_eq!(fields.stock, Some(4));
        assert_eq!(fields.category_id, Some(3));
        assert_eq!(fields.image_url.as_deref(), Some("/img/w.png"));
    }

    #[test]
    fn test_name_is_required() {
        let err = ProductCreate::default().into_fields().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let blank = ProductUpdate {
            product_name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(
            blank.into_fields().unwrap_err().code,
            ErrorCode::RequiredField
        );
    }

    #[test]
    fn test_update_writes_omitted_fields_as_null() {
        let data: ProductUpdate =
            serde_json::from_str(r#"{"product_name": "Renamed", "stock": 2}"#).unwrap();
        let fields = data.into_fields().unwrap();

        assert_eq!(fields.product_name, "Renamed");
        assert_eq!(fields.stock, Some(2));
        assert_eq!(fields.price, None);
        assert_eq!(fields.image_url, None);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn test_filter_from_raw() {
        let filter =
            ProductFilter::from_raw(Some("widget"), Some("10"), Some("50.5"), Some("3")).unwrap();
        assert_eq!(filter.search.as_deref(), Some("widget"));
        assert_eq!(filter.min_price, Some(Decimal::from(10)));
        assert_eq!(filter.max_price, Some(Decimal::new(505, 1)));
        assert_eq!(filter.category_id, Some(3));
    }

    #[test]
    fn test_filter_accepts_exponent_and_whole_decimals() {
        let filter = ProductFilter::from_raw(None, Some("1e2"), None, Some("3.0")).unwrap();
        assert_eq!(filter.min_price, Some(Decimal::from(100)));
        assert_eq!(filter.category_id, Some(3));
    }

    #[test]
    fn test_create_accepts_numeric_strings() {
        let data: ProductCreate = serde_json::from_str(
            r#"{"product_name": "W", "price": "12.50", "stock": "3", "category_id": "2"}"#,
        )
        .unwrap();
        let fields = data.into_fields().unwrap();
        assert_eq!(fields.price, Some(Decimal::new(1250, 2)));
        assert_eq!(fields.stock, Some(3));
        assert_eq!(fields.category_id, Some(2));
    }

    #[test]
    fn test_filter_empty_values_are_absent() {
        let filter = ProductFilter::from_raw(Some(""), Some(""), Some(" "), None).unwrap();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_filter_rejects_non_numeric() {
        let err = ProductFilter::from_raw(None, Some("cheap"), None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.message, "minPrice must be a number");

        let err = ProductFilter::from_raw(None, None, None, Some("3.5")).unwrap_err();
        assert_eq!(err.message, "category must be an integer");
    }

    #[test]
    fn test_product_serializes_price_as_number() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let product = Product {
            product_id: 7,
            product_name: "Widget".into(),
            description: None,
            price: Some(Decimal::new(1999, 2)),
            stock: Some(3),
            category_id: None,
            image_url: Some(String::new()),
            created_at: at,
            updated_at: at,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(19.99));
        assert_eq!(json["category_id"], serde_json::Value::Null);
    }
}
