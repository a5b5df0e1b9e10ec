pub mod audit;
pub mod config;
pub mod error;
pub mod host;
pub mod protocol;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod rules;
pub mod service;
pub mod storage;
pub mod utils;

pub use record::MountRecord;
pub use service::{MountService, ServiceSettings, SharedMountService};
