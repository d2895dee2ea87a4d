pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::demos::build_demos;
pub use config::{DemoConfig, DemoKind};
pub use crate::core::runner::DemoRunner;
pub use utils::error::{Result, SolidError};
