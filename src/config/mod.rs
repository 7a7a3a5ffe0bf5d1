//! Configuration loading and management for the shift engine.
//!
//! The pure calculation functions take no configuration. Validation limits,
//! the week start used for weekly statistics, notification settings and the
//! workplace color palette live here.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Week starts on {}", loader.config().week_starts_on());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PALETTE, EngineConfig, EngineSettings, Limits, PaletteConfig, ReminderSettings,
};
