mod invocation;
mod prediction;

pub use invocation::{AttemptOutcome, InvocationAttempt, ProcessOutput};
pub use prediction::{
    EnrichedPayload, FeatureImportance, IndividualPredictions, ModelPerformance,
    PredictionOutcome, ReplyError, RuntimePrediction,
};
