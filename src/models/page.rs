//! Paging request and response types.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::AppError;

/// Offset used when the caller omits `skip`.
pub const DEFAULT_SKIP: usize = 0;

/// Page size used when the caller omits `take`.
pub const DEFAULT_TAKE: usize = 25;

/// A validated skip/take window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: usize,
    pub take: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            take: DEFAULT_TAKE,
        }
    }
}

impl PageRequest {
    /// Validate raw caller input. Negative values are rejected.
    pub fn new(skip: i64, take: i64) -> Result<Self, AppError> {
        Ok(Self {
            skip: non_negative("skip", skip)?,
            take: non_negative("take", take)?,
        })
    }

    /// Like [`PageRequest::new`], falling back to the defaults for missing values.
    pub fn from_optional(skip: Option<i64>, take: Option<i64>) -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            skip: skip.map_or(Ok(defaults.skip), |v| non_negative("skip", v))?,
            take: take.map_or(Ok(defaults.take), |v| non_negative("take", v))?,
        })
    }

    /// Index range this window covers in a listing of `total` items.
    pub fn bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.skip.min(total);
        let end = start + self.take.min(total - start);
        start..end
    }
}

/// Reject negative values; values beyond `usize::MAX` clamp to it.
fn non_negative(name: &str, value: i64) -> Result<usize, AppError> {
    if value < 0 {
        return Err(AppError::InvalidArgument(format!(
            "{} must not be negative, got {}",
            name, value
        )));
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// One page of the category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPage {
    /// Requested offset.
    pub skip: usize,
    /// Requested maximum count.
    pub take: usize,
    /// Size of the whole listing.
    pub total: usize,
    pub categories: Vec<Category>,
}
