//! Domain models for the category listing.

mod category;
mod page;

pub use category::{Category, CATEGORY_COUNT};
pub use page::{CategoryPage, PageRequest, DEFAULT_SKIP, DEFAULT_TAKE};
