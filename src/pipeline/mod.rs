//! Logo conversion pipeline.

mod convert;

pub use convert::{Config, Converter, OutputSpec, OUTPUTS};
