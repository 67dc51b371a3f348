//! # Cari
//!
//! An interactive terminal client for the GitHub repository search API. It
//! asks for a keyword, shows one page of matching repositories at a time and
//! lets the user pick the next page until they move on to another keyword.
//!
//! ## Main Components
//!
//! - [`InputController`]: reads keywords and page numbers from the terminal
//! - [`GitHubSearcher`]: issues the search request and decodes the response
//! - [`Presenter`]: banner, "Searching..." animation, results and errors
//! - [`App`]: the keyword/pagination loop tying the three together
//! - [`shutdown`]: the cancellation token the loop checks while it waits
//!
//! ## Example
//!
//! ```no_run
//! use cari_lib::{shutdown, App, Args, GitHubSearcher, InputController, Presenter};
//! use clap::Parser;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let args = Args::parse();
//!     let (trigger, shutdown) = shutdown::channel();
//!     tokio::spawn(async move {
//!         if tokio::signal::ctrl_c().await.is_ok() {
//!             trigger.trigger();
//!         }
//!     });
//!
//!     let mut app = App::new(
//!         GitHubSearcher::new(&args)?,
//!         InputController::new(BufReader::new(tokio::io::stdin()), std::io::stdout()),
//!         Presenter::new(std::io::stdout(), true),
//!         shutdown,
//!     );
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

mod app;
mod args;
mod error;
mod github_searcher;
mod input;
pub mod logging;
mod models;
mod presenter;
pub mod shutdown;

// Re-export main components for documentation and external use
pub use crate::app::{App, ExitReason};
pub use crate::args::Args;
pub use crate::error::SearchError;
pub use crate::github_searcher::{parse_search_body, GitHubSearcher};
pub use crate::input::{coerce_page, normalize_keyword, InputController};
pub use crate::models::{has_more, PaginationState, SearchResponse, SearchResultItem, PAGE_SIZE};
pub use crate::presenter::Presenter;
