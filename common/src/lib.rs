//! Common utilities for the wave visualizations
//!
//! This crate provides shared window and GPU setup, the scene camera, and
//! logger initialization used by every visualization binary.

pub mod graphics;
pub mod camera;
pub mod error;

pub use graphics::*;
pub use camera::*;
pub use error::GraphicsError;

/// Initialize the global logger.
///
/// Defaults to `info` unless `RUST_LOG` says otherwise. Safe to call more than
/// once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
