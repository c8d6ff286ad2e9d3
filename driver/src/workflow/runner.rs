use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use xcorrcore::prelude::{ProcessingStage, StageInput};
use xcorrcore::processing::CorrelationStage;
use xcorrcore::telemetry::MetricsSnapshot;

#[derive(Debug, Clone)]
pub struct WorkflowResult {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
    pub windows: usize,
    pub notes: Vec<String>,
    pub metrics: MetricsSnapshot,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn execute(&self, samples: &[f64]) -> anyhow::Result<WorkflowResult> {
        let stage_config = self.config.to_stage_config();

        let mut stage = CorrelationStage::new();
        stage
            .initialize(&stage_config)
            .context("initializing correlation stage")?;
        let output = stage
            .execute(StageInput {
                samples: samples.to_vec(),
                generation: None,
            })
            .context("executing correlation stage")?;
        let metrics = stage.metrics();
        info!(
            "correlation stage processed={} errors={} windows={}",
            metrics.processed, metrics.errors, metrics.windows
        );
        stage.cleanup();

        Ok(WorkflowResult {
            input: samples.to_vec(),
            windows: output.metadata.windows,
            notes: output.metadata.notes,
            output: output.samples,
            metrics,
        })
    }
}
