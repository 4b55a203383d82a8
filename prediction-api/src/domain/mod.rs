pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;

// Re-export entity types
pub use entities::{
    AttemptOutcome, EnrichedPayload, FeatureImportance, IndividualPredictions, InvocationAttempt,
    ModelPerformance, PredictionOutcome, ProcessOutput, ReplyError, RuntimePrediction,
};

// Re-export errors
pub use errors::PredictError;

// Re-export events
pub use events::PredictionEvent;

// Re-export value objects
pub use value_objects::LaunchSpec;
