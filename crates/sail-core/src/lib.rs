pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod traits;

#[cfg(test)]
mod testutil;

pub use config::{RemoteConfig, SourceConfig};
pub use error::AppError;
pub use models::{EventFilter, EventRecord, EventType, Provider, group_by_event_type};
pub use service::{ScheduleResult, ScheduleService};
pub use traits::{Extractor, Fetcher};
