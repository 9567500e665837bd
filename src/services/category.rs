//! Category page provider.

use crate::context::{AppDelay, Context};
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{Category, CategoryPage, PageRequest, CATEGORY_COUNT};

/// Produces skip/take windows of the category listing.
///
/// Stateless: each call derives its records from ids alone, after one
/// pass through the configured delay.
#[derive(Clone)]
pub struct CategoryPageProvider {
    delay: AppDelay,
}

impl FromRef<Context> for CategoryPageProvider {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            delay: <AppDelay as FromRef<Context>>::from_ref(ctx),
        }
    }
}

impl CategoryPageProvider {
    pub fn new(delay: AppDelay) -> Self {
        Self { delay }
    }

    /// Return the categories in the requested window, ascending by id.
    pub async fn get_page(&self, request: PageRequest) -> Result<Vec<Category>, AppError> {
        self.delay.pause().await;

        let range = request.bounds(CATEGORY_COUNT);
        tracing::debug!(
            skip = request.skip,
            take = request.take,
            returned = range.len(),
            "Generated category page"
        );

        // Ids fit in u32: the range is bounded by CATEGORY_COUNT.
        Ok(range.map(|id| Category::generate(id as u32)).collect())
    }

    /// Validate raw arguments, then fetch the page.
    ///
    /// Invalid arguments fail before the delay.
    pub async fn get_page_raw(&self, skip: i64, take: i64) -> Result<Vec<Category>, AppError> {
        let request = PageRequest::new(skip, take)?;
        self.get_page(request).await
    }

    /// Fetch the page wrapped with its window and the listing size.
    pub async fn get_category_page(&self, request: PageRequest) -> Result<CategoryPage, AppError> {
        let categories = self.get_page(request).await?;
        Ok(CategoryPage {
            skip: request.skip,
            take: request.take,
            total: CATEGORY_COUNT,
            categories,
        })
    }
}
