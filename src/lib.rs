//! Pool failover watcher library.

pub mod alert;
pub mod config;
pub mod lifecycle;
pub mod probe;
pub mod watcher;

pub use config::schema::WatcherConfig;
pub use lifecycle::Shutdown;
pub use watcher::PoolWatcher;
