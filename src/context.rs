//! Application context shared by handlers and commands.

use std::sync::Arc;

use crate::config::Config;
use crate::di::FromRef;
use crate::services::{Delay, TokioDelay};

/// Shared latency implementation.
pub type AppDelay = Arc<dyn Delay>;

/// Root application context.
///
/// Services are resolved from it through `FromRef<Context>`.
#[derive(Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Latency applied to page requests.
    pub delay: AppDelay,
}

impl Context {
    /// Creates a context whose delay follows `config.catalog.delay_ms`.
    pub fn new(config: Config) -> Self {
        let delay = Arc::new(TokioDelay::new(config.catalog.delay()));
        Self::with_delay(config, delay)
    }

    /// Creates a context with an explicit delay implementation.
    pub fn with_delay(config: Config, delay: AppDelay) -> Self {
        Self {
            config: Arc::new(config),
            delay,
        }
    }
}

impl FromRef<Context> for AppDelay {
    fn from_ref(ctx: &Context) -> Self {
        ctx.delay.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::time::Instant;

    use crate::config::CatalogConfig;
    use crate::models::PageRequest;
    use crate::services::CategoryPageProvider;

    fn config_with_delay(delay_ms: u64) -> Config {
        Config {
            catalog: CatalogConfig { delay_ms },
            ..Config::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_applies_to_resolved_provider() {
        let ctx = Context::new(config_with_delay(250));
        let provider = CategoryPageProvider::from_ref(&ctx);

        let start = Instant::now();
        let page = provider.get_page(PageRequest::default()).await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(250), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(300), "elapsed {elapsed:?}");
        assert_eq!(page.len(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_config_returns_immediately() {
        let ctx = Context::new(config_with_delay(0));
        let provider = CategoryPageProvider::from_ref(&ctx);

        let start = Instant::now();
        provider.get_page(PageRequest::default()).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
