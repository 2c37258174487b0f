pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::document::{HtmlDocument, MemoryDocument};
pub use crate::adapters::http::{RandomUserClient, DEFAULT_API_ENDPOINT};
pub use crate::adapters::random::{SeededRandom, ThreadRandom};
pub use crate::app::render::{log_recovery_hint, render_card, RenderReport, RenderedOutput};
pub use crate::config::CardSettings;
pub use crate::core::loader::CardLoader;
pub use crate::utils::error::{CardError, Result};
