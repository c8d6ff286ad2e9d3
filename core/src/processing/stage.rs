use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::processing::correlate::CrossCorrelator;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{MetricsRecorder, MetricsSnapshot};

/// Stage wrapper that applies a configured kernel to each incoming sample run.
pub struct CorrelationStage {
    correlator: Option<CrossCorrelator<f64>>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl CorrelationStage {
    pub fn new() -> Self {
        Self {
            correlator: None,
            logger: LogManager::new("correlation"),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for CorrelationStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for CorrelationStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        if let Some(weight) = config.kernel.iter().find(|w| !w.is_finite()) {
            return Err(StageError::InvalidInput(format!(
                "kernel weight {} is not finite",
                weight
            )));
        }
        let correlator = CrossCorrelator::new(config.kernel.clone(), config.padding)?;
        self.logger.record(&format!(
            "initialized {}-tap kernel with {} padding",
            correlator.kernel().len(),
            correlator.padding()
        ));
        self.correlator = Some(correlator);
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let correlator = self
            .correlator
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;

        let samples = match correlator.correlate(&input.samples) {
            Ok(samples) => samples,
            Err(err) => {
                self.metrics.record_error();
                self.logger.warn(&format!("correlation failed: {}", err));
                return Err(err.into());
            }
        };

        let windows = samples.len();
        self.metrics.record_processed(windows);
        self.logger.record(&format!(
            "correlated {} samples into {} windows",
            input.samples.len(),
            windows
        ));

        let mut notes = vec![format!(
            "kernel {:?} padding {}",
            correlator.kernel(),
            correlator.padding()
        )];
        if windows == 0 {
            notes.push(format!(
                "input of {} samples shorter than kernel",
                input.samples.len()
            ));
        }

        Ok(StageOutput {
            samples,
            metadata: StageMetadata {
                windows,
                generation: input.generation,
                notes,
            },
        })
    }

    fn cleanup(&mut self) {
        self.correlator = None;
        self.metrics.reset();
    }
}
