#[macro_use]
mod macros;
mod config_entry;
mod error;


pub use config_entry::SamplerConfig;
pub use error::ConfigError;
