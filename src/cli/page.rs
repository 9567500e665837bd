//! Page command handler.

use std::sync::Arc;

use clap::Args;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::models::{PageRequest, DEFAULT_SKIP, DEFAULT_TAKE};
use crate::services::{CategoryPageProvider, NoDelay};

/// Print one page of the category listing as JSON.
#[derive(Args, Debug)]
pub struct PageCommand {
    /// Number of categories to skip
    #[arg(long, default_value_t = DEFAULT_SKIP as i64, allow_negative_numbers = true)]
    pub skip: i64,

    /// Maximum number of categories to return
    #[arg(long, default_value_t = DEFAULT_TAKE as i64, allow_negative_numbers = true)]
    pub take: i64,

    /// Skip the configured artificial delay
    #[arg(long)]
    pub no_delay: bool,
}

impl PageCommand {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        let ctx = if self.no_delay {
            Context::with_delay(config, Arc::new(NoDelay))
        } else {
            Context::new(config)
        };

        let request = PageRequest::new(self.skip, self.take)?;
        let page = CategoryPageProvider::from_ref(&ctx)
            .get_category_page(request)
            .await?;

        println!("{}", serde_json::to_string_pretty(&page)?);
        Ok(())
    }
}
