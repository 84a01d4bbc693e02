pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, LocalStorage};

pub use config::CleanConfig;
pub use core::{etl::EtlEngine, pipeline::ResultsPipeline, projection::omit_field};
pub use domain::model::{Document, Record, TransformResult};
pub use utils::error::{CleanError, Result};
