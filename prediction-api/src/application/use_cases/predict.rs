use crate::application::ports::{PredictionObserver, ProcessLauncher};
use crate::application::use_cases::RuntimeInvoker;
use crate::domain::{EnrichedPayload, PredictError, PredictionEvent, PredictionOutcome};
use market_signal::{RandomSource, SnapshotInput, analyze};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct PredictCommand {
    pub snapshot: SnapshotInput,
    pub headline: Option<String>,
}

/// Validates a request, scores its headline and delegates the prediction
/// to the model runtime
pub struct PredictUseCase<L>
where
    L: ProcessLauncher,
{
    invoker: RuntimeInvoker<L>,
    random: Arc<dyn RandomSource>,
    observer: Arc<dyn PredictionObserver>,
}

impl<L> PredictUseCase<L>
where
    L: ProcessLauncher,
{
    pub fn new(
        invoker: RuntimeInvoker<L>,
        random: Arc<dyn RandomSource>,
        observer: Arc<dyn PredictionObserver>,
    ) -> Self {
        Self {
            invoker,
            random,
            observer,
        }
    }

    pub async fn execute(&self, command: PredictCommand) -> Result<PredictionOutcome, PredictError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("predict", %request_id);
        self.run(request_id, command).instrument(span).await
    }

    async fn run(
        &self,
        request_id: Uuid,
        command: PredictCommand,
    ) -> Result<PredictionOutcome, PredictError> {
        let snapshot = command.snapshot.validate()?;
        let headline = command.headline.unwrap_or_default();

        let analysis = analyze(&headline, &snapshot, self.random.as_ref());
        tracing::debug!(
            score = %analysis.score,
            positive = ?analysis.positive_hits,
            negative = ?analysis.negative_hits,
            crypto_positive = ?analysis.crypto_positive_hits,
            crypto_negative = ?analysis.crypto_negative_hits,
            relative_range = %analysis.relative_range,
            jittered = analysis.jittered,
            "Headline scored"
        );

        self.observer.on_event(&PredictionEvent::RequestAccepted {
            request_id,
            sentiment: analysis.score,
            headline_chars: headline.chars().count(),
        });

        let payload = EnrichedPayload::new(&snapshot, analysis.score, headline);
        let input = payload
            .to_json()
            .map_err(|e| PredictError::Internal(format!("failed to encode runtime input: {}", e)))?;

        let reply = self.invoker.invoke(request_id, &input).await?;

        Ok(PredictionOutcome {
            request_id,
            prediction: reply.prediction,
            calculated_sentiment: analysis.score,
            candidate: reply.candidate,
        })
    }
}
