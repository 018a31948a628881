pub mod aggregator;
pub mod report;
pub mod source;

pub use aggregator::{count_occurrences, PostAggregator};
pub use report::Report;
pub use source::{HttpRecordSource, RecordSource};
