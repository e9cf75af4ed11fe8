pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sink::{ConsoleSink, DocumentSink, MemorySink};
pub use config::toml_config::GwaConfig;
pub use crate::core::calculator::{compute, Calculator, GradingPolicy};
pub use crate::core::controller::RowController;
pub use domain::model::{FieldBindings, OutputField, ResultSet, Row, RowId, Standing};
pub use utils::error::{GwaError, Result};
