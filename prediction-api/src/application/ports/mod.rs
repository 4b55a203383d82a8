mod prediction_observer;
mod process_launcher;

pub use prediction_observer::{NoopObserver, PredictionObserver};
pub use process_launcher::{LaunchError, ProcessLauncher};
