pub mod acbs;
pub mod builders;
pub mod config;
pub mod dates;
pub mod defaults;
pub mod domain;
pub mod errors;

pub use builders::{merge_snapshot, Snapshot};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};
pub use dates::{DateFormatError, DateOnly};
pub use defaults::DefaultValues;
pub use errors::{classify, AcbsError, KnownError, UpstreamBody, UpstreamFailure};
