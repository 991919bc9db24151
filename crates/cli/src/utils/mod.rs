pub mod config;

pub use config::resolve_config;
