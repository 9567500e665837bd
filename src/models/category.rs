//! Category model for the synthetic listing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of categories in the listing (ids `0..=1000`).
pub const CATEGORY_COUNT: usize = 1001;

/// Price increment per id, in hundredths (17.54).
const PRICE_STEP_CENTS: i64 = 1754;

/// A synthetic category.
///
/// Every field is a pure function of `id`, so a category can be rebuilt
/// from its position in the listing at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Position in the listing.
    pub id: u32,
    /// Display title, `"Categoria {id}"`.
    pub title: String,
    /// `id * 17.54`, scale 2.
    pub price: Decimal,
}

impl Category {
    /// Build the category at position `id`.
    pub fn generate(id: u32) -> Self {
        Self {
            id,
            title: format!("Categoria {}", id),
            price: Decimal::new(i64::from(id) * PRICE_STEP_CENTS, 2),
        }
    }
}
