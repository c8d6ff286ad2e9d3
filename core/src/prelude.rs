use crate::processing::correlate::Padding;
use serde::{Deserialize, Serialize};

/// Configuration shared by correlation stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub kernel: Vec<f64>,
    #[serde(default)]
    pub padding: Padding,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            kernel: vec![1.0; 3],
            padding: Padding::default(),
        }
    }
}

/// Input payload for a processing stage.
#[derive(Debug, Clone)]
pub struct StageInput {
    pub samples: Vec<f64>,
    /// Automaton generation the samples belong to, if the caller tracks one.
    pub generation: Option<u64>,
}

/// Output produced by each stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub samples: Vec<f64>,
    pub metadata: StageMetadata,
}

/// Metadata used for chaining stages and telemetry.
#[derive(Debug, Clone, Default)]
pub struct StageMetadata {
    pub windows: usize,
    pub generation: Option<u64>,
    pub notes: Vec<String>,
}

/// Failures of the correlation primitive itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("invalid padding mode `{0}`, expected `same` or `valid`")]
    InvalidPaddingMode(String),
    #[error("kernel must contain at least one weight")]
    EmptyKernel,
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
    #[error(transparent)]
    Correlation(#[from] CorrelationError),
}

pub type StageResult<T> = Result<T, StageError>;

/// Trait describing signal-processing stages driven by a workflow runner.
pub trait ProcessingStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()>;
    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput>;
    fn cleanup(&mut self);
}
