pub mod config;
pub mod observer;
pub mod process;

pub use config::{ConfigError, RuntimeConfig};
pub use observer::TracingObserver;
pub use process::TokioProcessLauncher;
