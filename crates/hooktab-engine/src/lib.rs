//! Search orchestration: candidate gathering, metadata filtering and
//! CSV persistence, wired around the extraction pipeline in
//! `hooktab-probe` and the HTTP layer in `hooktab-client`.

pub mod config;
pub mod error;
pub mod filter;
pub mod search;
pub mod storage;
pub mod urls;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::ConfigError;
pub use filter::{ComplexityTier, SearchParams};
pub use search::{SearchEngine, SearchSummary};
pub use storage::CsvStorage;
