pub mod calculator;
pub mod controller;
pub mod format;

pub use crate::domain::model::{ResultSet, Row, RowId, Standing};
pub use crate::domain::ports::{ConfigProvider, ResultSink, RowSource};
pub use crate::utils::error::Result;
