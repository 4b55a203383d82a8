mod predict;
mod runtime_invoker;

pub use predict::{PredictCommand, PredictUseCase};
pub use runtime_invoker::{RuntimeInvoker, RuntimeReply};
