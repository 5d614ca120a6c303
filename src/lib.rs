pub mod api;
pub mod clipboard;
pub mod core;
pub mod error;
pub mod render;
pub mod repl;
pub mod screen;
pub mod view;

// Re-exports
pub use crate::core::config::AnalystConfig;
pub use crate::core::types::{AnalysisResponse, Ticker};
pub use crate::error::{AnalystError, Result};
pub use crate::render::Report;
pub use crate::view::AnalysisView;
