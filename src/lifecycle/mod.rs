//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT (ctrl-c, handled in main)
//!     → Shutdown::trigger
//!     → broadcast to the watch loop
//!     → loop exits between ticks
//! ```
//!
//! # Design Decisions
//! - Shutdown is cooperative: the loop observes the signal between ticks
//! - Startup is fail-fast: a bad config ends the process before any probe

pub mod shutdown;

pub use shutdown::Shutdown;
