pub mod array;
pub mod dot;

pub use array::correlate_array;
pub use dot::{dot, Sample};
