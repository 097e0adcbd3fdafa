pub mod partitioner;
pub mod validator;

pub use partitioner::Partitioner;
pub use validator::{CsvValidator, ValidationReport};
