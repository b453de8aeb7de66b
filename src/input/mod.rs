pub mod errors;
pub mod parse;

pub use errors::{InputError, Series};
pub use parse::{parse_samples, parse_values, Samples};
