pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use pipeline::{Insights, Pipeline};
pub use services::{HttpRecordSource, PostAggregator, RecordSource, Report};
