//! Wiring configuration.
//!
//! Optional TOML file controlling how strict the aggregator and connector
//! are. Everything has a default, so an application can skip it entirely.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CollisionPolicy, ThuxConfig, WiringConfig};
