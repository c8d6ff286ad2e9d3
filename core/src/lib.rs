//! Cross-correlation core for cellular-automaton update rules.
//!
//! The crate exposes a single numeric primitive, [`correlate`], together with
//! a validated [`CrossCorrelator`] wrapper, an `ndarray` adapter and a
//! processing-stage shell so drivers can chain it like any other stage.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{CorrelationError, ProcessingStage, StageInput, StageOutput};
pub use processing::correlate::{correlate, correlate_with_mode, CrossCorrelator, Padding};
