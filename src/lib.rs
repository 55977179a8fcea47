pub mod cli;
pub mod converter;
pub mod error;
pub mod utils;

pub use converter::{ConversionOutcome, ConversionSummary, ImageConverter, FROM_FORMAT, TO_FORMAT};
pub use error::ConvertError;
