pub mod app_config;
pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod name_title;
pub mod person;
pub mod query;

pub use app_config::AppConfig;
pub use collector::ProfileCollector;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ExportError};
pub use export::{export_people, plan_chunks, ExportedFile};
pub use name_title::split_name_title;
pub use person::{Person, ProfileHit, CSV_HEADER};
pub use query::{build_queries, parse_list, SearchQuery};
