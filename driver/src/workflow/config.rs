use crate::generator::profile::{build_sequence, GeneratorConfig};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xcorrcore::prelude::StageConfig;
use xcorrcore::Padding;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub kernel: Vec<f64>,
    pub padding: Padding,
    pub sequence: Option<Vec<f64>>,
    pub generator: Option<GeneratorConfig>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            kernel: vec![1.0; 3],
            padding: Padding::Same,
            sequence: None,
            generator: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(kernel: Vec<f64>, padding: Padding, sequence: Option<Vec<f64>>) -> Self {
        Self {
            kernel,
            padding,
            sequence,
            generator: None,
        }
    }

    pub fn to_stage_config(&self) -> StageConfig {
        StageConfig {
            kernel: self.kernel.clone(),
            padding: self.padding,
        }
    }

    /// Explicit samples win over the generator.
    pub fn resolve_sequence(&self) -> anyhow::Result<Vec<f64>> {
        match (&self.sequence, &self.generator) {
            (Some(sequence), _) => Ok(sequence.clone()),
            (None, Some(generator)) => {
                build_sequence(generator).context("generating input sequence")
            }
            (None, None) => bail!("no input sequence: pass --input, --generate or a workflow file"),
        }
    }
}
