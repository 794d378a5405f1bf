// src/lib.rs
pub mod config;
pub mod units;
pub mod schema;
pub mod normalize;
pub mod ingest;
pub mod query;
pub mod store;
pub mod engine;
pub mod api;
pub mod server;

pub use config::{AppConfig, CONFIG};
pub use engine::{Command, EngineError, SearchController, SearchControllerBuilder, format_query};
pub use query::{SearchQuery, SizeOperator, SizeQuery, parse_size_query};
pub use schema::{FileRecord, RawRow};
pub use store::{MemoryRecordStore, RecordStore, SledRecordStore};
