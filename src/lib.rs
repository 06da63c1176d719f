//! Fire-and-forget versus wait-for-completion task spawning on Tokio.

pub mod config;
pub mod demo;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use lifecycle::JoinBarrier;
pub use observability::Logger;
