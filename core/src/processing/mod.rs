pub mod correlate;
pub mod stage;

pub use correlate::{correlate, correlate_with_mode, output_len, CrossCorrelator, Padding};
pub use stage::CorrelationStage;
