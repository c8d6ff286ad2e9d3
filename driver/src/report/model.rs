use crate::workflow::runner::WorkflowResult;
use serde::{Deserialize, Serialize};
use xcorrcore::Padding;

/// Summary of one correlation run as printed or appended to a report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    pub kernel: Vec<f64>,
    pub padding: Padding,
    pub input_len: usize,
    pub output: Vec<f64>,
    pub notes: Vec<String>,
}

impl ReportModel {
    pub fn new(kernel: &[f64], padding: Padding, result: &WorkflowResult) -> Self {
        Self {
            kernel: kernel.to_vec(),
            padding,
            input_len: result.input.len(),
            output: result.output.clone(),
            notes: result.notes.clone(),
        }
    }

    /// Space-separated output values, one line.
    pub fn plain(&self) -> String {
        self.output
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn summary(&self) -> String {
        format!(
            "kernel={:?} padding={} input_len={} output_len={} notes={:?}\n",
            self.kernel,
            self.padding,
            self.input_len,
            self.output.len(),
            self.notes
        )
    }
}
