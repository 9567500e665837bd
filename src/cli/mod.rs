//! CLI module for Categoria.
//!
//! Subcommands:
//! - `serve`: Run the HTTP server
//! - `page`: Print one page of categories as JSON

mod page;
mod serve;

use clap::{Parser, Subcommand};

pub use page::PageCommand;

/// Categoria - paged synthetic category listing
#[derive(Parser)]
#[command(name = "categoria")]
#[command(about = "Paged synthetic category listing - HTTP service and CLI")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print one page of categories as JSON
    Page(PageCommand),
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Serve { ref host, port } => self.run_serve(host.as_deref(), port).await,
            Command::Page(ref cmd) => cmd.run().await,
        }
    }
}
