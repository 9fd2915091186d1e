pub mod errors;
pub mod filter;
pub mod logging;
pub mod output;
pub mod provider;
pub mod root;

pub use errors::ConfigError;
pub use filter::FilterConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use provider::ProviderConfig;
pub use root::{CliOverrides, Config};
