pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use ports::{LaunchError, NoopObserver, PredictionObserver, ProcessLauncher};
pub use use_cases::{PredictCommand, PredictUseCase, RuntimeInvoker, RuntimeReply};
