//! Route handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{CategoryPage, PageRequest};
use crate::services::CategoryPageProvider;

/// Raw `?skip=&take=` query parameters.
///
/// A parameter given with an empty value counts as omitted.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub take: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {:?}", raw)))
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = AppError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        PageRequest::from_optional(query.skip, query.take)
    }
}

/// `GET /categories`
pub async fn list_categories(
    State(ctx): State<Context>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryPage>, AppError> {
    // Non-numeric parameters fail deserialization
    let Query(query) = query.map_err(|e| AppError::InvalidArgument(e.body_text()))?;
    let request = PageRequest::try_from(query)?;

    let provider = CategoryPageProvider::from_ref(&ctx);
    let page = provider.get_category_page(request).await?;

    Ok(Json(page))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let request = PageRequest::try_from(PageQuery::default()).unwrap();
        assert_eq!(request, PageRequest::default());
    }

    fn parse(uri: &str) -> Result<PageQuery, QueryRejection> {
        let uri: axum::http::Uri = uri.parse().unwrap();
        Query::try_from_uri(&uri).map(|Query(query)| query)
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let query = parse("/categories?skip=&take=").unwrap();
        assert_eq!(query.skip, None);
        assert_eq!(query.take, None);
        let request = PageRequest::try_from(query).unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_numeric_values_parsed() {
        let query = parse("/categories?skip=40&take=-2").unwrap();
        assert_eq!(query.skip, Some(40));
        assert_eq!(query.take, Some(-2));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let err = parse("/categories?skip=abc").unwrap_err();
        assert!(err.body_text().contains("expected an integer"));
    }

    #[test]
    fn test_page_query_negative_take() {
        let query = PageQuery {
            skip: Some(0),
            take: Some(-1),
        };
        assert!(matches!(
            PageRequest::try_from(query),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
